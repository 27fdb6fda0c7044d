//! Update Issue Status Use Case

use std::sync::Arc;

use kernel::public_id::{IssuePublicId, UserPublicId};

use crate::application::ownership::load_owned;
use crate::domain::{Issue, IssueRepository, IssueStatus};
use crate::error::{IssueError, IssueResult};

pub struct UpdateIssueStatusUseCase<R>
where
    R: IssueRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateIssueStatusUseCase<R>
where
    R: IssueRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Only the status (and `updated_at`) changes
    pub async fn execute(
        &self,
        caller: &UserPublicId,
        issue_id: &IssuePublicId,
        status: IssueStatus,
    ) -> IssueResult<Issue> {
        let mut issue = load_owned(&*self.repo, issue_id, caller).await?;
        let previous = issue.status;

        issue.set_status(status);
        // Deleted after it was loaded
        if !self.repo.update(&issue).await? {
            return Err(IssueError::NotFound);
        }

        tracing::info!(
            issue_id = %issue_id,
            from = %previous,
            to = %status,
            "Issue status updated"
        );
        Ok(issue)
    }
}
