use std::path::PathBuf;

use tracing::debug;

use crate::cmd::read_input;
use crate::error::{AppError, AppResult};
use crate::record::{self, Value};

pub async fn run_process(input: Option<PathBuf>) -> AppResult<String> {
    let value = read_value(input).await?;
    debug!("processing a single {} value", value.kind());
    Ok(serde_json::to_string_pretty(&record::process(&value))?)
}

pub async fn run_batch(input: Option<PathBuf>) -> AppResult<String> {
    let value = read_value(input).await?;
    debug!("processing a {} as a batch", value.kind());
    Ok(serde_json::to_string_pretty(&record::process_batch(&value))?)
}

async fn read_value(input: Option<PathBuf>) -> AppResult<Value> {
    let raw = read_input(input.as_ref()).await?;
    parse_value(&raw)
}

fn parse_value(raw: &str) -> AppResult<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Absent);
    }
    let json: serde_json::Value = serde_json::from_str(raw)
        .map_err(|err| AppError::InvalidInput(format!("input is not valid JSON: {err}")))?;
    Ok(Value::from(json))
}
