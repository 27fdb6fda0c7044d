//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::public_id::{IssuePublicId, UserPublicId};
use sqlx::PgPool;

use crate::domain::repository::IssueRepository;
use crate::domain::{Issue, IssueContent, IssueStatus, IssueTitle};
use crate::error::{IssueError, IssueResult};

/// PostgreSQL-backed issue repository
#[derive(Clone)]
pub struct PgIssueRepository {
    pool: PgPool,
}

impl PgIssueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl IssueRepository for PgIssueRepository {
    async fn create(&self, issue: &Issue) -> IssueResult<()> {
        sqlx::query(
            r#"
            INSERT INTO issues (
                issue_id,
                owner_id,
                title,
                content,
                status,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(issue.issue_id.as_str())
        .bind(issue.owner_id.as_str())
        .bind(issue.title.as_str())
        .bind(issue.content.as_str())
        .bind(issue.status.id())
        .bind(issue.created_at)
        .bind(issue.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, issue_id: &IssuePublicId) -> IssueResult<Option<Issue>> {
        let row = sqlx::query_as::<_, IssueRow>(
            r#"
            SELECT issue_id, owner_id, title, content, status, created_at, updated_at
            FROM issues
            WHERE issue_id = $1
            "#,
        )
        .bind(issue_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(IssueRow::into_issue).transpose()
    }

    async fn list_by_owner(&self, owner_id: &UserPublicId) -> IssueResult<Vec<Issue>> {
        let rows = sqlx::query_as::<_, IssueRow>(
            r#"
            SELECT issue_id, owner_id, title, content, status, created_at, updated_at
            FROM issues
            WHERE owner_id = $1
            ORDER BY created_at DESC, issue_id
            "#,
        )
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(IssueRow::into_issue).collect()
    }

    async fn update(&self, issue: &Issue) -> IssueResult<bool> {
        let updated = sqlx::query(
            r#"
            UPDATE issues SET
                status = $2,
                updated_at = $3
            WHERE issue_id = $1
            "#,
        )
        .bind(issue.issue_id.as_str())
        .bind(issue.status.id())
        .bind(issue.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated > 0)
    }

    async fn delete(&self, issue_id: &IssuePublicId) -> IssueResult<bool> {
        let deleted = sqlx::query("DELETE FROM issues WHERE issue_id = $1")
            .bind(issue_id.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct IssueRow {
    issue_id: String,
    owner_id: String,
    title: String,
    content: String,
    status: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl IssueRow {
    fn into_issue(self) -> IssueResult<Issue> {
        let issue_id = IssuePublicId::parse_str(&self.issue_id)
            .map_err(|e| IssueError::Internal(format!("Invalid issue_id: {}", e)))?;
        let owner_id = UserPublicId::parse_str(&self.owner_id)
            .map_err(|e| IssueError::Internal(format!("Invalid owner_id: {}", e)))?;
        let status = IssueStatus::from_id(self.status)
            .ok_or_else(|| IssueError::Internal(format!("Invalid status: {}", self.status)))?;

        Ok(Issue {
            issue_id,
            owner_id,
            title: IssueTitle::from_db(self.title),
            content: IssueContent::from_db(self.content),
            status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
