//! Application Layer
//!
//! Issue use cases. The caller is always identified by the public id of a
//! user whose session has already been checked.

pub mod create_issue;
pub mod delete_issue;
pub mod list_issues;
pub mod update_issue_status;

mod ownership;

// Re-exports
pub use create_issue::{CreateIssueInput, CreateIssueUseCase};
pub use delete_issue::DeleteIssueUseCase;
pub use list_issues::ListIssuesUseCase;
pub use update_issue_status::UpdateIssueStatusUseCase;
