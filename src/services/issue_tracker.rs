use async_trait::async_trait;

use crate::domain::issue::CandidateFilter;
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn list_candidates(&self, filter: &CandidateFilter) -> AppResult<Vec<String>>;
    async fn fetch_description(&self, key: &str) -> AppResult<String>;
    async fn push_description(&self, key: &str, text: &str) -> AppResult<()>;
}
