use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// A dynamically-kinded input value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Absent,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Text(String),
    Map(IndexMap<String, Value>),
    List(Vec<Value>),
    /// A value of a kind with no dedicated arm, tagged by its kind name.
    Opaque(String),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::UInt(_) | Value::Float(_) => "number",
            Value::Text(_) => "text",
            Value::Map(_) => "mapping",
            Value::List(_) => "sequence",
            Value::Opaque(_) => "opaque",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Equality where numbers compare by value across integer and float arms.
    ///
    /// Booleans stay distinct from numbers.
    pub fn same_as(&self, other: &Value) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(left), Some(right)) => left.same_as(right),
            _ => self == other,
        }
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(int) => Some(Number::Int(i128::from(*int))),
            Value::UInt(uint) => Some(Number::Int(i128::from(*uint))),
            Value::Float(float) => Some(Number::Float(*float)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Number {
    Int(i128),
    Float(f64),
}

impl Number {
    fn same_as(self, other: Number) -> bool {
        match (self, other) {
            (Number::Int(left), Number::Int(right)) => left == right,
            (Number::Float(left), Number::Float(right)) => left == right,
            (Number::Int(int), Number::Float(float))
            | (Number::Float(float), Number::Int(int)) => {
                float.is_finite() && float.fract() == 0.0 && float as i128 == int
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Value::Int(int)
                } else if let Some(uint) = number.as_u64() {
                    Value::UInt(uint)
                } else {
                    number
                        .as_f64()
                        .map(Value::Float)
                        .unwrap_or_else(|| Value::Opaque(number.to_string()))
                }
            }
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Absent => serde_json::Value::Null,
            Value::Bool(flag) => serde_json::Value::Bool(*flag),
            Value::Int(int) => serde_json::Value::from(*int),
            Value::UInt(uint) => serde_json::Value::from(*uint),
            Value::Float(float) => serde_json::Number::from_f64(*float)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(text) => serde_json::Value::String(text.clone()),
            Value::Map(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Opaque(kind) => serde_json::Value::String(format!("<{kind}>")),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Value::from(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_json_kinds() {
        let value = Value::from(json!({
            "name": "x",
            "count": 3,
            "ratio": 0.5,
            "ok": true,
            "gone": null,
            "items": [1, "a"]
        }));

        let Value::Map(map) = value else {
            panic!("expected a mapping");
        };
        assert_eq!(map["name"], Value::Text("x".to_string()));
        assert_eq!(map["count"], Value::Int(3));
        assert_eq!(map["ratio"], Value::Float(0.5));
        assert_eq!(map["ok"], Value::Bool(true));
        assert!(map["gone"].is_absent());
        assert_eq!(
            map["items"],
            Value::List(vec![Value::Int(1), Value::Text("a".to_string())])
        );
    }

    #[test]
    fn large_unsigned_numbers_stay_exact() {
        let value = Value::from(json!(u64::MAX));
        assert_eq!(value, Value::UInt(u64::MAX));
        assert_eq!(value.kind(), "number");
        assert_eq!(serde_json::to_string(&value).unwrap(), "18446744073709551615");
    }

    #[test]
    fn keeps_mapping_key_order() {
        let json: serde_json::Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let value = Value::from(json);
        let Value::Map(map) = &value else {
            panic!("expected a mapping");
        };
        assert_eq!(map.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"zeta":1,"alpha":2,"mid":3}"#
        );
    }

    #[test]
    fn numbers_compare_by_value_across_arms() {
        assert!(Value::Int(1).same_as(&Value::Float(1.0)));
        assert!(Value::UInt(u64::MAX).same_as(&Value::UInt(u64::MAX)));
        assert!(!Value::Int(1).same_as(&Value::Float(1.5)));
        assert!(!Value::Int(1).same_as(&Value::Bool(true)));
        assert!(!Value::Float(f64::NAN).same_as(&Value::Float(f64::NAN)));
        assert!(Value::Text("a".to_string()).same_as(&Value::Text("a".to_string())));
    }

    #[test]
    fn serializes_back_to_json() {
        let value = Value::List(vec![Value::Int(-2), Value::Float(f64::NAN), Value::Absent]);
        assert_eq!(serde_json::to_value(&value).unwrap(), json!([-2, null, null]));
    }
}
