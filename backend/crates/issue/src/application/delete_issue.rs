//! Delete Issue Use Case

use std::sync::Arc;

use kernel::public_id::{IssuePublicId, UserPublicId};

use crate::application::ownership::load_owned;
use crate::domain::{Issue, IssueRepository};
use crate::error::{IssueError, IssueResult};

pub struct DeleteIssueUseCase<R>
where
    R: IssueRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteIssueUseCase<R>
where
    R: IssueRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Returns the issue as it was before removal
    pub async fn execute(
        &self,
        caller: &UserPublicId,
        issue_id: &IssuePublicId,
    ) -> IssueResult<Issue> {
        let issue = load_owned(&*self.repo, issue_id, caller).await?;

        // Lost a race with another delete
        if !self.repo.delete(issue_id).await? {
            return Err(IssueError::NotFound);
        }

        tracing::info!(issue_id = %issue_id, "Issue deleted");
        Ok(issue)
    }
}
