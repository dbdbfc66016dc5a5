use std::fmt;

use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::description;
use crate::domain::issue::IssueRecord;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub updated: usize,
    pub failed: usize,
    pub skipped: usize,
    pub previewed: usize,
}

impl SyncSummary {
    pub fn processed(&self) -> usize {
        self.updated + self.failed
    }
}

impl fmt::Display for SyncSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Successfully updated: {}", self.updated)?;
        writeln!(f, "Errors: {}", self.failed)?;
        write!(f, "Total processed: {}", self.processed())?;
        if self.skipped > 0 {
            write!(f, "\nSkipped (no description): {}", self.skipped)?;
        }
        if self.previewed > 0 {
            write!(f, "\nPreviewed (dry run): {}", self.previewed)?;
        }
        Ok(())
    }
}

/// Rewrites the description of every candidate work item.
///
/// Only a failure to list candidates is returned as an error; per-item
/// failures are logged and counted so the remaining items still run.
pub async fn reformat_candidates(ctx: &AppContext, dry_run: bool) -> AppResult<SyncSummary> {
    let keys = ctx
        .issue_tracker
        .list_candidates(&ctx.config.filter)
        .await?;

    info!("found {} work item(s) to process", keys.len());

    let mut summary = SyncSummary::default();
    let total = keys.len();

    for (index, key) in keys.into_iter().enumerate() {
        info!("processing {key} ({}/{total})", index + 1);

        let record = match ctx.issue_tracker.fetch_description(&key).await {
            Ok(description) => IssueRecord { key, description },
            Err(err) => {
                warn!("failed to get details for {key}: {err}");
                summary.failed += 1;
                continue;
            }
        };

        if record.description.trim().is_empty() {
            info!("no description content found for {}", record.key);
            summary.skipped += 1;
            continue;
        }

        let rebuilt = description::build(&record.description);

        if dry_run {
            println!("--- {} ---\n{rebuilt}\n", record.key);
            summary.previewed += 1;
            continue;
        }

        match ctx
            .issue_tracker
            .push_description(&record.key, &rebuilt)
            .await
        {
            Ok(()) => {
                info!("updated {}", record.key);
                summary.updated += 1;
            }
            Err(err) => {
                warn!("failed to update {}: {err}", record.key);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}
