//! Use case tests against the in-memory repository

#[cfg(test)]
mod usecase_tests {
    use std::sync::Arc;

    use kernel::public_id::{IssuePublicId, UserPublicId};

    use crate::application::{
        CreateIssueInput, CreateIssueUseCase, DeleteIssueUseCase, ListIssuesUseCase,
        UpdateIssueStatusUseCase,
    };
    use crate::error::IssueResult;
    use crate::{Issue, IssueError, IssueRepository, IssueStatus, MemoryIssueRepository};

    /// Loses every issue right after handing it out, as if another request
    /// deleted it in between
    struct VanishingRepository(MemoryIssueRepository);

    impl IssueRepository for VanishingRepository {
        async fn create(&self, issue: &Issue) -> IssueResult<()> {
            self.0.create(issue).await
        }

        async fn find_by_id(&self, issue_id: &IssuePublicId) -> IssueResult<Option<Issue>> {
            let found = self.0.find_by_id(issue_id).await?;
            self.0.delete(issue_id).await?;
            Ok(found)
        }

        async fn list_by_owner(&self, owner_id: &UserPublicId) -> IssueResult<Vec<Issue>> {
            self.0.list_by_owner(owner_id).await
        }

        async fn update(&self, issue: &Issue) -> IssueResult<bool> {
            self.0.update(issue).await
        }

        async fn delete(&self, issue_id: &IssuePublicId) -> IssueResult<bool> {
            self.0.delete(issue_id).await
        }
    }

    fn repo() -> Arc<MemoryIssueRepository> {
        Arc::new(MemoryIssueRepository::new())
    }

    async fn create(
        repo: &Arc<MemoryIssueRepository>,
        owner: UserPublicId,
        title: &str,
        status: IssueStatus,
    ) -> Issue {
        CreateIssueUseCase::new(repo.clone())
            .execute(
                owner,
                CreateIssueInput {
                    title: title.to_string(),
                    content: format!("details of {title}"),
                    status,
                },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_update_status() {
        let repo = repo();
        let owner = UserPublicId::new();
        let created = create(&repo, owner, "Login page broken", IssueStatus::Todo).await;

        let updated = UpdateIssueStatusUseCase::new(repo.clone())
            .execute(&owner, &created.issue_id, IssueStatus::Done)
            .await
            .unwrap();

        assert_eq!(updated.status, IssueStatus::Done);
        assert_eq!(updated.issue_id, created.issue_id);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.owner_id, owner);

        let listed = ListIssuesUseCase::new(repo.clone()).execute(&owner).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, IssueStatus::Done);
    }

    #[tokio::test]
    async fn test_same_status_update_allowed() {
        let repo = repo();
        let owner = UserPublicId::new();
        let created = create(&repo, owner, "Typo", IssueStatus::Backlog).await;

        let updated = UpdateIssueStatusUseCase::new(repo.clone())
            .execute(&owner, &created.issue_id, IssueStatus::Backlog)
            .await
            .unwrap();
        assert_eq!(updated.status, IssueStatus::Backlog);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let repo = repo();
        let result = CreateIssueUseCase::new(repo.clone())
            .execute(
                UserPublicId::new(),
                CreateIssueInput {
                    title: "   ".to_string(),
                    content: String::new(),
                    status: IssueStatus::Todo,
                },
            )
            .await;
        assert!(matches!(result, Err(IssueError::InvalidTitle(_))));

        let result = CreateIssueUseCase::new(repo.clone())
            .execute(
                UserPublicId::new(),
                CreateIssueInput {
                    title: "Ok".to_string(),
                    content: "x".repeat(10_001),
                    status: IssueStatus::Todo,
                },
            )
            .await;
        assert!(matches!(result, Err(IssueError::InvalidContent(_))));
    }

    #[tokio::test]
    async fn test_list_scoped_to_owner() {
        let repo = repo();
        let alice = UserPublicId::new();
        let bob = UserPublicId::new();
        create(&repo, alice, "first", IssueStatus::Todo).await;
        create(&repo, alice, "second", IssueStatus::InProgress).await;
        create(&repo, bob, "bob's", IssueStatus::Todo).await;

        let list = ListIssuesUseCase::new(repo.clone());
        let mine = list.execute(&alice).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|i| i.owner_id == alice));
        assert!(mine[0].created_at >= mine[1].created_at);

        assert!(list.execute(&UserPublicId::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_owner_cannot_modify() {
        let repo = repo();
        let owner = UserPublicId::new();
        let intruder = UserPublicId::new();
        let issue = create(&repo, owner, "private", IssueStatus::Todo).await;

        let update = UpdateIssueStatusUseCase::new(repo.clone())
            .execute(&intruder, &issue.issue_id, IssueStatus::Done)
            .await;
        assert!(matches!(update, Err(IssueError::Forbidden)));

        let delete = DeleteIssueUseCase::new(repo.clone())
            .execute(&intruder, &issue.issue_id)
            .await;
        assert!(matches!(delete, Err(IssueError::Forbidden)));

        let still_there = ListIssuesUseCase::new(repo.clone())
            .execute(&owner)
            .await
            .unwrap();
        assert_eq!(still_there[0].status, IssueStatus::Todo);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = repo();
        let owner = UserPublicId::new();
        let issue = create(&repo, owner, "duplicate", IssueStatus::Todo).await;
        let delete = DeleteIssueUseCase::new(repo.clone());

        let removed = delete.execute(&owner, &issue.issue_id).await.unwrap();
        assert_eq!(removed.issue_id, issue.issue_id);
        assert_eq!(removed.title, issue.title);

        assert!(matches!(
            delete.execute(&owner, &issue.issue_id).await,
            Err(IssueError::NotFound)
        ));
        assert!(
            ListIssuesUseCase::new(repo.clone())
                .execute(&owner)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_unknown_issue_not_found() {
        let repo = repo();
        let result = UpdateIssueStatusUseCase::new(repo.clone())
            .execute(&UserPublicId::new(), &IssuePublicId::new(), IssueStatus::Done)
            .await;
        assert!(matches!(result, Err(IssueError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_of_deleted_issue_reports_missing() {
        let repo = repo();
        let owner = UserPublicId::new();
        let mut issue = create(&repo, owner, "short lived", IssueStatus::Todo).await;

        assert!(repo.delete(&issue.issue_id).await.unwrap());
        issue.set_status(IssueStatus::Done);
        assert!(!repo.update(&issue).await.unwrap());
        assert!(repo.find_by_id(&issue.issue_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_status_update_racing_delete_is_not_found() {
        let repo = repo();
        let owner = UserPublicId::new();
        let issue = create(&repo, owner, "racing", IssueStatus::Todo).await;

        let vanishing = Arc::new(VanishingRepository((*repo).clone()));
        let result = UpdateIssueStatusUseCase::new(vanishing)
            .execute(&owner, &issue.issue_id, IssueStatus::Done)
            .await;
        assert!(matches!(result, Err(IssueError::NotFound)));
        assert!(
            ListIssuesUseCase::new(repo.clone())
                .execute(&owner)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
