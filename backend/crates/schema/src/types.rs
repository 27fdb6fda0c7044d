//! GraphQL object, enum and input types

use std::marker::PhantomData;

use async_graphql::{Context, Enum, InputObject, Object, Result, SimpleObject};
use auth::models::user::User;
use chrono::{DateTime, SecondsFormat, Utc};
use issue::{Issue, IssueRepository};
use issue::usecase::ListIssuesUseCase;
use kernel::public_id::UserPublicId;

use crate::context::IssueServices;
use crate::error::gql_error;

/// `2025-01-01T12:00:00.000Z`
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "IssueStatus")]
pub enum IssueStatusValue {
    Backlog,
    Todo,
    InProgress,
    Done,
}

impl From<issue::IssueStatus> for IssueStatusValue {
    fn from(status: issue::IssueStatus) -> Self {
        match status {
            issue::IssueStatus::Backlog => Self::Backlog,
            issue::IssueStatus::Todo => Self::Todo,
            issue::IssueStatus::InProgress => Self::InProgress,
            issue::IssueStatus::Done => Self::Done,
        }
    }
}

impl From<IssueStatusValue> for issue::IssueStatus {
    fn from(status: IssueStatusValue) -> Self {
        match status {
            IssueStatusValue::Backlog => Self::Backlog,
            IssueStatusValue::Todo => Self::Todo,
            IssueStatusValue::InProgress => Self::InProgress,
            IssueStatusValue::Done => Self::Done,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Issue")]
pub struct IssueObject {
    pub id: String,
    pub title: String,
    /// Public id of the owner
    pub user_id: String,
    pub content: String,
    pub status: IssueStatusValue,
    pub created_at: String,
}

impl From<Issue> for IssueObject {
    fn from(issue: Issue) -> Self {
        Self {
            id: issue.issue_id.to_string(),
            title: issue.title.as_str().to_string(),
            user_id: issue.owner_id.to_string(),
            content: issue.content.as_str().to_string(),
            status: issue.status.into(),
            created_at: timestamp(issue.created_at),
        }
    }
}

/// `User` as seen by clients
///
/// `token` is only set on the result of `createUser` and `signin`.
pub struct UserObject<I> {
    public_id: UserPublicId,
    email: String,
    created_at: String,
    token: Option<String>,
    _marker: PhantomData<fn() -> I>,
}

impl<I> UserObject<I> {
    pub fn new(user: User, token: Option<String>) -> Self {
        Self {
            public_id: user.public_id,
            email: user.email.as_str().to_string(),
            created_at: timestamp(user.created_at),
            token,
            _marker: PhantomData,
        }
    }
}

#[Object(name = "User")]
impl<I: IssueRepository + Sync + 'static> UserObject<I> {
    async fn id(&self) -> String {
        self.public_id.to_string()
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn created_at(&self) -> &str {
        &self.created_at
    }

    async fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Issues owned by this user, newest first
    async fn issues(&self, ctx: &Context<'_>) -> Result<Vec<IssueObject>> {
        let services = ctx.data::<IssueServices<I>>()?;
        let issues = ListIssuesUseCase::new(services.repo.clone())
            .execute(&self.public_id)
            .await
            .map_err(gql_error)?;
        Ok(issues.into_iter().map(IssueObject::from).collect())
    }
}

#[derive(InputObject)]
pub struct AuthInput {
    pub email: String,
    pub password: String,
}

#[derive(InputObject)]
pub struct CreateIssueInput {
    pub title: String,
    pub content: String,
    pub status: IssueStatusValue,
}
