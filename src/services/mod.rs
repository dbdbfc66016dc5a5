pub mod command;
pub mod issue_tracker;

pub use command::CommandRunner;
pub use issue_tracker::IssueTrackerService;
