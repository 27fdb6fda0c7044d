//! List Issues Use Case

use std::sync::Arc;

use kernel::public_id::UserPublicId;

use crate::domain::{Issue, IssueRepository};
use crate::error::IssueResult;

pub struct ListIssuesUseCase<R>
where
    R: IssueRepository,
{
    repo: Arc<R>,
}

impl<R> ListIssuesUseCase<R>
where
    R: IssueRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Issues owned by `owner`, newest first
    pub async fn execute(&self, owner: &UserPublicId) -> IssueResult<Vec<Issue>> {
        self.repo.list_by_owner(owner).await
    }
}
