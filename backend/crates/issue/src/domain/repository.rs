//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use kernel::public_id::{IssuePublicId, UserPublicId};

use crate::domain::entity::issue::Issue;
use crate::error::IssueResult;

#[trait_variant::make(IssueRepository: Send)]
pub trait LocalIssueRepository {
    async fn create(&self, issue: &Issue) -> IssueResult<()>;

    async fn find_by_id(&self, issue_id: &IssuePublicId) -> IssueResult<Option<Issue>>;

    /// Every issue of one owner, newest first
    async fn list_by_owner(&self, owner_id: &UserPublicId) -> IssueResult<Vec<Issue>>;

    /// Persist status and `updated_at`; returns whether the issue still existed
    async fn update(&self, issue: &Issue) -> IssueResult<bool>;

    /// Returns whether an issue was deleted
    async fn delete(&self, issue_id: &IssuePublicId) -> IssueResult<bool>;
}
