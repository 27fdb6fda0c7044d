//! Issue Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Issue entity, status, validated title/content, repository trait
//! - `application/` - Create, list, update-status and delete use cases
//! - `infra/` - PostgreSQL and in-memory implementations
//!
//! Issues belong to the user who created them. Only the owner may change
//! or delete an issue.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use domain::{Issue, IssueRepository, IssueStatus};
pub use error::{IssueError, IssueResult};
pub use infra::{memory::MemoryIssueRepository, postgres::PgIssueRepository};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod usecase {
    pub use crate::application::{
        CreateIssueInput, CreateIssueUseCase, DeleteIssueUseCase, ListIssuesUseCase,
        UpdateIssueStatusUseCase,
    };
}

#[cfg(test)]
mod tests;
