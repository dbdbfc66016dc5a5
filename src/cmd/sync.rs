use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::reformat::{SyncSummary, reformat_candidates};

#[derive(Debug, Clone)]
pub struct SyncCommandArgs {
    pub dry_run: bool,
}

pub async fn run(ctx: &AppContext, args: SyncCommandArgs) -> AppResult<SyncSummary> {
    reformat_candidates(ctx, args.dry_run).await
}
