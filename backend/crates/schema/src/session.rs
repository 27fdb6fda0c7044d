//! Resolving the caller from the request's bearer token

use async_graphql::{Context, Result};
use auth::models::client_info::ClientInfo;
use auth::models::user::User;
use auth::usecase::CheckSessionUseCase;
use auth::{AuthError, AuthStore};

use crate::context::{AuthServices, RequestAuth};
use crate::error::gql_error;

pub(crate) fn bearer_token<'a>(ctx: &'a Context<'_>) -> Option<&'a str> {
    ctx.data_opt::<RequestAuth>()
        .and_then(|auth| auth.bearer_token.as_deref())
}

pub(crate) fn client_info(ctx: &Context<'_>) -> ClientInfo {
    ctx.data_opt::<RequestAuth>()
        .map(|auth| auth.client.clone())
        .unwrap_or_default()
}

/// The signed-in user, or `NOT_AUTHENTICATED` / `SESSION_INVALID`
pub(crate) async fn require_user<A: AuthStore>(ctx: &Context<'_>) -> Result<User> {
    let services = ctx.data::<AuthServices<A>>()?;
    let token = bearer_token(ctx).ok_or_else(|| gql_error(AuthError::NotAuthenticated))?;

    CheckSessionUseCase::new(
        services.store.clone(),
        services.store.clone(),
        services.config.clone(),
    )
    .execute(token)
    .await
    .map_err(gql_error)
}
