use async_trait::async_trait;

use crate::error::AppResult;

/// Runs an external program and returns its trimmed stdout.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> AppResult<String>;
}
