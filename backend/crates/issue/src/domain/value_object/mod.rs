//! Value Object Module

pub mod issue_content;
pub mod issue_status;
pub mod issue_title;

pub use issue_content::{IssueContent, IssueContentError};
pub use issue_status::IssueStatus;
pub use issue_title::{IssueTitle, IssueTitleError};
