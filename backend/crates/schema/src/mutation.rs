//! Mutation root

use std::marker::PhantomData;

use async_graphql::{Context, ID, Object, Result};
use auth::AuthStore;
use auth::usecase::{SignInInput, SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase};
use issue::usecase::{CreateIssueUseCase, DeleteIssueUseCase, UpdateIssueStatusUseCase};
use issue::{IssueError, IssueRepository};
use kernel::public_id::IssuePublicId;

use crate::context::{AuthServices, IssueServices};
use crate::error::gql_error;
use crate::session::{bearer_token, client_info, require_user};
use crate::types::{AuthInput, CreateIssueInput, IssueObject, IssueStatusValue, UserObject};

pub struct MutationRoot<A, I>(PhantomData<fn() -> (A, I)>);

impl<A, I> Default for MutationRoot<A, I> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

/// Ids that do not parse cannot name an existing issue
fn parse_issue_id(id: &str) -> Result<IssuePublicId> {
    IssuePublicId::parse_str(id).map_err(|_| gql_error(IssueError::NotFound))
}

#[Object]
impl<A: AuthStore, I: IssueRepository + Sync + 'static> MutationRoot<A, I> {
    /// Register and sign in; `null` on failure
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        input: AuthInput,
    ) -> Result<Option<UserObject<I>>> {
        let services = ctx.data::<AuthServices<A>>()?;
        let authenticated = SignUpUseCase::new(
            services.store.clone(),
            services.store.clone(),
            services.config.clone(),
        )
        .execute(
            SignUpInput {
                email: input.email,
                password: input.password,
            },
            client_info(ctx),
        )
        .await
        .map_err(gql_error)?;

        let token = authenticated.session_token.into_string();
        Ok(Some(UserObject::new(authenticated.user, Some(token))))
    }

    /// Sign in; `null` on failure
    async fn signin(&self, ctx: &Context<'_>, input: AuthInput) -> Result<Option<UserObject<I>>> {
        let services = ctx.data::<AuthServices<A>>()?;
        let authenticated = SignInUseCase::new(
            services.store.clone(),
            services.store.clone(),
            services.store.clone(),
            services.config.clone(),
        )
        .execute(
            SignInInput {
                email: input.email,
                password: input.password,
            },
            client_info(ctx),
        )
        .await
        .map_err(gql_error)?;

        let token = authenticated.session_token.into_string();
        Ok(Some(UserObject::new(authenticated.user, Some(token))))
    }

    /// End the caller's session; `false` when there was none
    async fn signout(&self, ctx: &Context<'_>) -> Result<bool> {
        let Some(token) = bearer_token(ctx) else {
            return Ok(false);
        };
        let services = ctx.data::<AuthServices<A>>()?;
        SignOutUseCase::new(services.store.clone(), services.config.clone())
            .execute(token)
            .await
            .map_err(gql_error)
    }

    async fn create_issue(&self, ctx: &Context<'_>, input: CreateIssueInput) -> Result<IssueObject> {
        let user = require_user::<A>(ctx).await?;
        let services = ctx.data::<IssueServices<I>>()?;
        let issue = CreateIssueUseCase::new(services.repo.clone())
            .execute(
                user.public_id,
                issue::usecase::CreateIssueInput {
                    title: input.title,
                    content: input.content,
                    status: input.status.into(),
                },
            )
            .await
            .map_err(gql_error)?;
        Ok(issue.into())
    }

    async fn update_issue_status(
        &self,
        ctx: &Context<'_>,
        id: String,
        status: IssueStatusValue,
    ) -> Result<IssueObject> {
        let user = require_user::<A>(ctx).await?;
        let issue_id = parse_issue_id(&id)?;
        let services = ctx.data::<IssueServices<I>>()?;
        let issue = UpdateIssueStatusUseCase::new(services.repo.clone())
            .execute(&user.public_id, &issue_id, status.into())
            .await
            .map_err(gql_error)?;
        Ok(issue.into())
    }

    /// Remove an issue, returning it as it was
    async fn delete_issue(&self, ctx: &Context<'_>, id: ID) -> Result<IssueObject> {
        let user = require_user::<A>(ctx).await?;
        let issue_id = parse_issue_id(&id)?;
        let services = ctx.data::<IssueServices<I>>()?;
        let issue = DeleteIssueUseCase::new(services.repo.clone())
            .execute(&user.public_id, &issue_id)
            .await
            .map_err(gql_error)?;
        Ok(issue.into())
    }
}
