//! Auth Gateway
//!
//! Submits credentials, stores the returned token and moves to `/`.
//! Nothing is validated on this side; the server is the only judge.

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;

use crate::documents;
use crate::error::ClientError;
use crate::graphql::{GraphqlRequest, GraphqlTransport};
use crate::navigation::{Navigator, Route};
use crate::token_store::TokenStore;
use crate::types::{Credentials, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    fn request(&self, credentials: &Credentials) -> GraphqlRequest {
        let variables = json!({ "input": credentials });
        match self {
            AuthMode::SignIn => GraphqlRequest::new(documents::SIGNIN, variables).named("Signin"),
            AuthMode::SignUp => {
                GraphqlRequest::new(documents::CREATE_USER, variables).named("CreateUser")
            }
        }
    }

    fn field(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "signin",
            AuthMode::SignUp => "createUser",
        }
    }
}

/// Why an authentication attempt did not sign the user in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("That email is already registered")]
    EmailTaken,

    #[error("Too many failed attempts. Try again later")]
    AccountLocked,

    /// Rejected by server-side validation; carries the server's message
    #[error("{0}")]
    InvalidInput(String),

    #[error("The server did not return a session token")]
    MissingToken,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Could not reach the server: {0}")]
    Transport(String),
}

impl From<ClientError> for AuthFailure {
    fn from(err: ClientError) -> Self {
        if err.is_transport() {
            return AuthFailure::Transport(err.to_string());
        }
        match err.reason() {
            Some("INVALID_CREDENTIALS") => AuthFailure::InvalidCredentials,
            Some("EMAIL_TAKEN") => AuthFailure::EmailTaken,
            Some("ACCOUNT_LOCKED") => AuthFailure::AccountLocked,
            Some("INVALID_EMAIL" | "INVALID_PASSWORD") => AuthFailure::InvalidInput(err.to_string()),
            _ => AuthFailure::Server(err.to_string()),
        }
    }
}

pub struct AuthGateway<T> {
    transport: T,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl<T: GraphqlTransport + Sync> AuthGateway<T> {
    pub fn new(transport: T, tokens: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            transport,
            tokens,
            navigator,
        }
    }

    /// Send `signin` or `createUser`
    ///
    /// On success the token is stored before navigating to `/`, once.
    /// On failure neither the token store nor the route changes. No retry.
    pub async fn submit(&self, mode: AuthMode, credentials: &Credentials) -> Result<User, AuthFailure> {
        let response = self
            .transport
            .execute(&mode.request(credentials), None)
            .await?;
        let user: User = response.decode(mode.field())?;

        let Some(token) = user.token.as_deref().filter(|t| !t.is_empty()) else {
            tracing::warn!(mode = ?mode, "Authentication response without token");
            return Err(AuthFailure::MissingToken);
        };

        self.tokens.set(token);
        self.navigator.navigate(Route::Home);
        tracing::info!(mode = ?mode, user_id = %user.id, "Signed in");
        Ok(user)
    }
}
