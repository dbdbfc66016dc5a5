use std::path::PathBuf;

use crate::cmd::read_input;
use crate::domain::description;
use crate::error::AppResult;

pub async fn run(input: Option<PathBuf>) -> AppResult<String> {
    let raw = read_input(input.as_ref()).await?;
    Ok(description::build(&raw))
}
