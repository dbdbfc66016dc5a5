use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::issue::{self, CandidateFilter};
use crate::error::{AppError, AppResult};
use crate::services::{CommandRunner, IssueTrackerService};

/// Issue tracker access through the Atlassian command-line tool.
pub struct AcliClient {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl AcliClient {
    pub fn new(runner: Arc<dyn CommandRunner>, program: String) -> Self {
        Self { runner, program }
    }

    async fn workitem(&self, args: &[&str]) -> AppResult<String> {
        let mut full = vec!["jira".to_string(), "workitem".to_string()];
        full.extend(args.iter().map(|arg| arg.to_string()));
        self.runner.run(&self.program, &full).await
    }

    fn stage_prefix(key: &str) -> String {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        format!("desc_{safe}_")
    }
}

#[async_trait]
impl IssueTrackerService for AcliClient {
    async fn list_candidates(&self, filter: &CandidateFilter) -> AppResult<Vec<String>> {
        let jql = filter.jql();
        debug!("searching work items: {jql}");

        let raw = self.workitem(&["search", "--jql", jql.as_str(), "--json"]).await?;
        issue::parse_search_keys(&raw)
    }

    async fn fetch_description(&self, key: &str) -> AppResult<String> {
        let raw = self.workitem(&["view", key, "--json"]).await?;
        issue::parse_description(&raw).map_err(|err| {
            AppError::IssueTracker(format!("failed to parse work item {key}: {err}"))
        })
    }

    async fn push_description(&self, key: &str, text: &str) -> AppResult<()> {
        let mut staged = tempfile::Builder::new()
            .prefix(&Self::stage_prefix(key))
            .suffix(".txt")
            .tempfile()?;
        staged.write_all(text.as_bytes())?;
        staged.flush()?;

        let path = staged.path().to_string_lossy().into_owned();
        let outcome = self
            .workitem(&["edit", "--key", key, "--description-file", path.as_str(), "--yes"])
            .await;

        if let Err(err) = staged.close() {
            warn!("could not remove staged description {path}: {err}");
        }

        outcome.map(|_| ())
    }
}
