use chrono::Utc;
use serde::Serialize;

use crate::record::validate::validate;
use crate::record::value::Value;

pub const INVALID_INPUT: &str = "Invalid input provided";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessResult {
    pub success: bool,
    pub error: Option<String>,
    pub data: Option<Value>,
}

impl ProcessResult {
    fn ok(data: Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn invalid() -> Self {
        Self {
            success: false,
            error: Some(INVALID_INPUT.to_string()),
            data: None,
        }
    }
}

/// Validates and normalises a single value.
pub fn process(value: &Value) -> ProcessResult {
    if !validate(value) {
        return ProcessResult::invalid();
    }

    let processed = match value {
        Value::Text(text) => Value::Text(text.trim().to_lowercase()),
        Value::Int(int) => int
            .checked_abs()
            .map(Value::Int)
            .unwrap_or_else(|| Value::UInt(int.unsigned_abs())),
        Value::Float(float) => Value::Float(float.abs()),
        Value::Map(map) => {
            let mut stamped = map.clone();
            stamped.insert("processed".to_string(), Value::Bool(true));
            stamped.insert("timestamp".to_string(), Value::Float(epoch_seconds()));
            Value::Map(stamped)
        }
        Value::List(items) => Value::List(dedup_present(items)),
        other => other.clone(),
    };

    ProcessResult::ok(processed)
}

fn epoch_seconds() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

// Keeps the first occurrence of each present item; `1` and `1.0` are one item.
fn dedup_present(items: &[Value]) -> Vec<Value> {
    let mut unique: Vec<Value> = Vec::with_capacity(items.len());
    for item in items.iter().filter(|item| !item.is_absent()) {
        if !unique.iter().any(|seen| seen.same_as(item)) {
            unique.push(item.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    #[test]
    fn empty_mapping_is_invalid() {
        assert_eq!(
            process(&Value::Map(IndexMap::new())),
            ProcessResult {
                success: false,
                error: Some("Invalid input provided".to_string()),
                data: None,
            }
        );
    }

    #[test]
    fn text_is_trimmed_and_lowercased() {
        let result = process(&Value::Text("  Hello World ".to_string()));
        assert!(result.success);
        assert_eq!(result.data, Some(Value::Text("hello world".to_string())));
    }

    #[test]
    fn numbers_become_absolute() {
        assert_eq!(process(&Value::Int(-7)).data, Some(Value::Int(7)));
        assert_eq!(process(&Value::Float(-2.5)).data, Some(Value::Float(2.5)));
        assert_eq!(process(&Value::Int(0)).data, Some(Value::Int(0)));
    }

    #[test]
    fn minimum_integer_widens_to_unsigned() {
        assert_eq!(
            process(&Value::Int(i64::MIN)).data,
            Some(Value::UInt(9_223_372_036_854_775_808))
        );
    }

    #[test]
    fn large_unsigned_integers_pass_through() {
        assert_eq!(
            process(&Value::UInt(u64::MAX)).data,
            Some(Value::UInt(u64::MAX))
        );
    }

    #[test]
    fn mapping_gets_processed_metadata() {
        let mut map = IndexMap::new();
        map.insert("name".to_string(), Value::Text("x".to_string()));

        let result = process(&Value::Map(map));
        let Some(Value::Map(data)) = result.data else {
            panic!("expected mapping data");
        };
        assert_eq!(data["name"], Value::Text("x".to_string()));
        assert_eq!(data["processed"], Value::Bool(true));
        assert!(matches!(data["timestamp"], Value::Float(ts) if ts > 1_600_000_000.0));
    }

    #[test]
    fn sequence_drops_absent_and_duplicates() {
        let input = Value::List(vec![
            Value::Int(1),
            Value::Absent,
            Value::Int(2),
            Value::Int(2),
        ]);
        let Some(Value::List(mut data)) = process(&input).data else {
            panic!("expected sequence data");
        };
        data.sort_by_key(|item| match item {
            Value::Int(int) => *int,
            _ => i64::MAX,
        });
        assert_eq!(data, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn sequence_treats_equal_int_and_float_as_duplicates() {
        let input = Value::from(serde_json::json!([1, 1.0, 2]));
        let Some(Value::List(data)) = process(&input).data else {
            panic!("expected sequence data");
        };
        assert_eq!(data, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn sequence_keeps_booleans_apart_from_numbers() {
        let input = Value::List(vec![Value::Int(1), Value::Bool(true), Value::Int(0)]);
        let Some(Value::List(data)) = process(&input).data else {
            panic!("expected sequence data");
        };
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn mapping_keeps_key_order_with_metadata_last() {
        let input = Value::from(serde_json::json!({"zeta": 1, "alpha": 2}));
        let Some(Value::Map(data)) = process(&input).data else {
            panic!("expected mapping data");
        };
        assert_eq!(
            data.keys().collect::<Vec<_>>(),
            ["zeta", "alpha", "processed", "timestamp"]
        );
    }

    #[test]
    fn booleans_pass_through() {
        assert_eq!(process(&Value::Bool(false)).data, Some(Value::Bool(false)));
    }
}
