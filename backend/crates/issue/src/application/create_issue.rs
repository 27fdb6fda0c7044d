//! Create Issue Use Case

use std::sync::Arc;

use kernel::public_id::UserPublicId;

use crate::domain::{Issue, IssueContent, IssueRepository, IssueStatus, IssueTitle};
use crate::error::IssueResult;

pub struct CreateIssueInput {
    pub title: String,
    pub content: String,
    pub status: IssueStatus,
}

pub struct CreateIssueUseCase<R>
where
    R: IssueRepository,
{
    repo: Arc<R>,
}

impl<R> CreateIssueUseCase<R>
where
    R: IssueRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner: UserPublicId, input: CreateIssueInput) -> IssueResult<Issue> {
        let title = IssueTitle::new(&input.title)?;
        let content = IssueContent::new(input.content)?;

        let issue = Issue::new(owner, title, content, input.status);
        self.repo.create(&issue).await?;

        tracing::info!(
            issue_id = %issue.issue_id,
            owner = %issue.owner_id,
            status = %issue.status,
            "Issue created"
        );
        Ok(issue)
    }
}
