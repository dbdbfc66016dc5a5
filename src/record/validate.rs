use crate::record::value::Value;

pub const MAX_TEXT_LEN: usize = 1000;

/// Reports whether `value` is acceptable input for [`process`](super::process).
pub fn validate(value: &Value) -> bool {
    match value {
        Value::Absent => false,
        Value::Bool(_) => true,
        Value::Int(_) | Value::UInt(_) => true,
        Value::Float(float) => !float.is_nan(),
        Value::Text(text) => !text.trim().is_empty() && text.chars().count() <= MAX_TEXT_LEN,
        Value::Map(map) => !map.is_empty(),
        Value::List(items) => !items.is_empty(),
        Value::Opaque(_) => false,
    }
}
