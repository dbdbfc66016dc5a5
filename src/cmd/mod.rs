pub mod config;
pub mod preview;
pub mod record;
pub mod sync;

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::error::AppResult;

/// Reads the whole of `path`, or stdin when it is absent or `-`.
pub async fn read_input(path: Option<&PathBuf>) -> AppResult<String> {
    match path {
        Some(path) if path.as_path() != Path::new("-") => {
            Ok(tokio::fs::read_to_string(path).await?)
        }
        _ => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            Ok(buffer)
        }
    }
}
