//! Data shared with resolvers
//!
//! Services are registered once on the schema; [`RequestAuth`] is attached
//! to every request by the HTTP layer.

use std::sync::Arc;

use auth::AuthConfig;
use auth::models::client_info::ClientInfo;

/// Auth store and configuration
pub struct AuthServices<A> {
    pub store: Arc<A>,
    pub config: Arc<AuthConfig>,
}

/// Issue repository
pub struct IssueServices<I> {
    pub repo: Arc<I>,
}

/// What the caller presented with this request
#[derive(Debug, Clone, Default)]
pub struct RequestAuth {
    /// Token from `Authorization: Bearer <token>`
    pub bearer_token: Option<String>,
    pub client: ClientInfo,
}

impl RequestAuth {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(token.into()),
            ..Default::default()
        }
    }
}
