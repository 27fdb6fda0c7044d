//! Issue Entity

use chrono::{DateTime, Utc};
use kernel::public_id::{IssuePublicId, UserPublicId};

use crate::domain::value_object::{IssueContent, IssueStatus, IssueTitle};

#[derive(Debug, Clone)]
pub struct Issue {
    pub issue_id: IssuePublicId,
    /// Public id of the owning user (`Issue.userId` on the wire)
    pub owner_id: UserPublicId,
    pub title: IssueTitle,
    pub content: IssueContent,
    pub status: IssueStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    pub fn new(
        owner_id: UserPublicId,
        title: IssueTitle,
        content: IssueContent,
        status: IssueStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            issue_id: IssuePublicId::new(),
            owner_id,
            title,
            content,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user: &UserPublicId) -> bool {
        &self.owner_id == user
    }

    /// Setting the current status again is allowed and still bumps `updated_at`
    pub fn set_status(&mut self, status: IssueStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(owner: UserPublicId) -> Issue {
        Issue::new(
            owner,
            IssueTitle::new("Crash on save").unwrap(),
            IssueContent::default(),
            IssueStatus::Todo,
        )
    }

    #[test]
    fn test_ownership() {
        let owner = UserPublicId::new();
        let issue = issue(owner);
        assert!(issue.is_owned_by(&owner));
        assert!(!issue.is_owned_by(&UserPublicId::new()));
    }

    #[test]
    fn test_set_status_keeps_identity() {
        let mut issue = issue(UserPublicId::new());
        let before = issue.clone();

        issue.set_status(IssueStatus::Done);
        assert_eq!(issue.status, IssueStatus::Done);
        assert_eq!(issue.issue_id, before.issue_id);
        assert_eq!(issue.title, before.title);
        assert_eq!(issue.created_at, before.created_at);
        assert!(issue.updated_at >= before.updated_at);
    }
}
