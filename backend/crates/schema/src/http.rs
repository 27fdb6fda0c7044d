//! GraphQL over HTTP
//!
//! `POST /graphql` executes a request, `GET /graphql` serves GraphiQL.

use std::convert::Infallible;
use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use auth::AuthStore;
use auth::models::client_info::ClientInfo;
use axum::extract::{ConnectInfo, FromRequestParts, State};
use axum::http::request::Parts;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use issue::IssueRepository;
use platform::client::{extract_bearer_token, extract_client_ip, extract_user_agent};

use crate::IssueTrackerSchema;
use crate::context::RequestAuth;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Caller metadata read from request headers and the peer address
pub struct ClientMeta(pub RequestAuth);

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Anonymous operations must still work; resolvers that need a
        // session report NOT_AUTHENTICATED themselves
        let bearer_token = extract_bearer_token(&parts.headers).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Ignoring unusable Authorization header");
            None
        });

        let direct_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.ip());
        let client = ClientInfo::new(
            extract_client_ip(&parts.headers, direct_ip),
            extract_user_agent(&parts.headers),
        );

        Ok(Self(RequestAuth {
            bearer_token,
            client,
        }))
    }
}

/// Router serving the schema at [`GRAPHQL_PATH`]
pub fn graphql_router<A, I>(schema: IssueTrackerSchema<A, I>) -> Router
where
    A: AuthStore,
    I: IssueRepository + Sync + 'static,
{
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler::<A, I>))
        .with_state(schema)
}

async fn graphql_handler<A, I>(
    State(schema): State<IssueTrackerSchema<A, I>>,
    ClientMeta(auth): ClientMeta,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response>
where
    A: AuthStore,
    I: IssueRepository + Sync + 'static,
{
    let operation = request.operation_name.clone();
    let response = schema.execute(request.data(auth)).await;

    if response.is_err() {
        tracing::debug!(
            operation = operation.as_deref().unwrap_or("<anonymous>"),
            errors = response.errors.len(),
            "GraphQL request finished with errors"
        );
    }
    Json(response)
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
