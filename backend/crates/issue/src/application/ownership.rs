//! Owner-only access shared by update and delete

use kernel::public_id::{IssuePublicId, UserPublicId};

use crate::domain::{Issue, IssueRepository};
use crate::error::{IssueError, IssueResult};

/// Load an issue the caller is allowed to modify
pub(crate) async fn load_owned<R: IssueRepository>(
    repo: &R,
    issue_id: &IssuePublicId,
    caller: &UserPublicId,
) -> IssueResult<Issue> {
    let issue = repo
        .find_by_id(issue_id)
        .await?
        .ok_or(IssueError::NotFound)?;

    if !issue.is_owned_by(caller) {
        tracing::warn!(
            issue_id = %issue_id,
            caller = %caller,
            "Refused modification of another user's issue"
        );
        return Err(IssueError::Forbidden);
    }
    Ok(issue)
}
