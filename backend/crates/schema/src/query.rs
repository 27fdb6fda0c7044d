//! Query root

use std::marker::PhantomData;

use async_graphql::{Context, Object, Result};
use auth::AuthStore;
use auth::usecase::LookupUserUseCase;
use issue::IssueRepository;
use issue::usecase::ListIssuesUseCase;

use crate::context::{AuthServices, IssueServices};
use crate::error::gql_error;
use crate::session::require_user;
use crate::types::{IssueObject, UserObject};

pub struct QueryRoot<A, I>(PhantomData<fn() -> (A, I)>);

impl<A, I> Default for QueryRoot<A, I> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[Object]
impl<A: AuthStore, I: IssueRepository + Sync + 'static> QueryRoot<A, I> {
    /// The signed-in user
    async fn user(&self, ctx: &Context<'_>) -> Result<UserObject<I>> {
        let user = require_user::<A>(ctx).await?;
        Ok(UserObject::new(user, None))
    }

    /// The caller's own issues, newest first
    async fn issues(&self, ctx: &Context<'_>) -> Result<Vec<IssueObject>> {
        let user = require_user::<A>(ctx).await?;
        let services = ctx.data::<IssueServices<I>>()?;
        let issues = ListIssuesUseCase::new(services.repo.clone())
            .execute(&user.public_id)
            .await
            .map_err(gql_error)?;
        Ok(issues.into_iter().map(IssueObject::from).collect())
    }

    /// Issues of the user registered under `email`; empty if there is none
    async fn issues_for_user(&self, ctx: &Context<'_>, email: String) -> Result<Vec<IssueObject>> {
        require_user::<A>(ctx).await?;

        let auth = ctx.data::<AuthServices<A>>()?;
        let Some(owner) = LookupUserUseCase::new(auth.store.clone())
            .by_email(&email)
            .await
            .map_err(gql_error)?
        else {
            return Ok(Vec::new());
        };

        let services = ctx.data::<IssueServices<I>>()?;
        let issues = ListIssuesUseCase::new(services.repo.clone())
            .execute(&owner.public_id)
            .await
            .map_err(gql_error)?;
        Ok(issues.into_iter().map(IssueObject::from).collect())
    }
}
