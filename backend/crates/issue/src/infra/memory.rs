//! In-memory Repository Implementation

use std::collections::HashMap;
use std::sync::Arc;

use kernel::public_id::{IssuePublicId, UserPublicId};
use tokio::sync::RwLock;

use crate::domain::Issue;
use crate::domain::repository::IssueRepository;
use crate::error::IssueResult;

/// Cheap to clone; clones share the same map
#[derive(Clone, Default)]
pub struct MemoryIssueRepository {
    issues: Arc<RwLock<HashMap<IssuePublicId, Issue>>>,
}

impl MemoryIssueRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IssueRepository for MemoryIssueRepository {
    async fn create(&self, issue: &Issue) -> IssueResult<()> {
        self.issues
            .write()
            .await
            .insert(issue.issue_id, issue.clone());
        Ok(())
    }

    async fn find_by_id(&self, issue_id: &IssuePublicId) -> IssueResult<Option<Issue>> {
        Ok(self.issues.read().await.get(issue_id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserPublicId) -> IssueResult<Vec<Issue>> {
        let mut issues: Vec<Issue> = self
            .issues
            .read()
            .await
            .values()
            .filter(|issue| issue.is_owned_by(owner_id))
            .cloned()
            .collect();
        issues.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.issue_id.as_str().cmp(b.issue_id.as_str()))
        });
        Ok(issues)
    }

    async fn update(&self, issue: &Issue) -> IssueResult<bool> {
        let mut issues = self.issues.write().await;
        let Some(existing) = issues.get_mut(&issue.issue_id) else {
            return Ok(false);
        };
        existing.status = issue.status;
        existing.updated_at = issue.updated_at;
        Ok(true)
    }

    async fn delete(&self, issue_id: &IssuePublicId) -> IssueResult<bool> {
        Ok(self.issues.write().await.remove(issue_id).is_some())
    }
}
