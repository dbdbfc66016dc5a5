use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::CommandRunner;

/// Spawns programs directly, without a shell in between.
pub struct ProcessRunner;

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> AppResult<String> {
        debug!("running {program} {}", args.join(" "));

        let output = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|err| AppError::Command {
                program: program.to_string(),
                status: "spawn failure".to_string(),
                stderr: err.to_string(),
            })?;

        if !output.status.success() {
            return Err(AppError::Command {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
