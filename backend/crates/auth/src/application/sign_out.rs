//! Sign Out Use Case
//!
//! Invalidates the session named by a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Returns `true` if a session was removed
    ///
    /// An invalid or already revoked token is not an error.
    pub async fn execute(&self, session_token: &str) -> AuthResult<bool> {
        let Ok(session_id) = SessionToken::verify(session_token, &self.config.session_secret)
        else {
            return Ok(false);
        };

        let deleted = self.session_repo.delete(&session_id).await?;
        if deleted {
            tracing::info!(session_id = %session_id, "User signed out");
        }
        Ok(deleted)
    }
}
