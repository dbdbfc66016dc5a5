use serde::Serialize;

use crate::record::transform::{ProcessResult, process};
use crate::record::value::Value;

pub const NOT_A_LIST: &str = "Input must be a list";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchResult {
    pub success: bool,
    pub error: Option<String>,
    pub processed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    pub results: Vec<ProcessResult>,
}

/// Runs [`process`] over every item of a sequence, in order.
pub fn process_batch(items: &Value) -> BatchResult {
    let Value::List(items) = items else {
        return BatchResult {
            success: false,
            error: Some(NOT_A_LIST.to_string()),
            processed: 0,
            total: None,
            results: Vec::new(),
        };
    };

    let results: Vec<ProcessResult> = items.iter().map(process).collect();
    let total = results.len();
    let succeeded = results.iter().filter(|result| result.success).count();
    let failed = total - succeeded;

    BatchResult {
        success: failed == 0,
        error: (failed > 0).then(|| format!("{failed} items failed")),
        processed: succeeded,
        total: Some(total),
        results,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn counts_failures() {
        let batch = process_batch(&Value::List(vec![
            Value::Int(1),
            Value::Text(String::new()),
            Value::Absent,
        ]));

        assert!(!batch.success);
        assert_eq!(batch.error.as_deref(), Some("2 items failed"));
        assert_eq!(batch.processed, 1);
        assert_eq!(batch.total, Some(3));
        assert_eq!(
            batch.results.iter().map(|r| r.success).collect::<Vec<_>>(),
            vec![true, false, false]
        );
    }

    #[test]
    fn rejects_non_sequence_input() {
        let batch = process_batch(&Value::Text("not a list".to_string()));
        assert_eq!(
            batch,
            BatchResult {
                success: false,
                error: Some("Input must be a list".to_string()),
                processed: 0,
                total: None,
                results: Vec::new(),
            }
        );
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            json!({
                "success": false,
                "error": "Input must be a list",
                "processed": 0,
                "results": []
            })
        );
    }

    #[test]
    fn empty_sequence_succeeds() {
        let batch = process_batch(&Value::List(Vec::new()));
        assert!(batch.success);
        assert_eq!(batch.error, None);
        assert_eq!(batch.total, Some(0));
    }

    #[test]
    fn all_valid_items_succeed() {
        let batch = process_batch(&Value::from(json!(["A", -3, true])));
        assert!(batch.success);
        assert_eq!(batch.processed, 3);
        assert_eq!(
            serde_json::to_value(&batch.results).unwrap(),
            json!([
                {"success": true, "error": null, "data": "a"},
                {"success": true, "error": null, "data": 3},
                {"success": true, "error": null, "data": true}
            ])
        );
    }
}
