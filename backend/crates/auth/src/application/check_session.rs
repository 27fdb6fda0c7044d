//! Check Session Use Case
//!
//! Resolves a bearer token to the signed-in user.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

pub struct CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository + Sync + 'static,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> CheckSessionUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository + Sync + 'static,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    /// Verify the token, load the session and return its user
    ///
    /// Activity time (and sliding expiry) is persisted in the background.
    pub async fn execute(&self, session_token: &str) -> AuthResult<User> {
        let session_id = SessionToken::verify(session_token, &self.config.session_secret)?;

        let mut session = self
            .session_repo
            .find_by_id(&session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(&session_id).await?;
            tracing::debug!(session_id = %session_id, "Expired session removed");
            return Err(AuthError::SessionInvalid);
        }

        session.touch();
        session.extend_if_needed(self.config.session_ttl_chrono());

        // Update in background
        let repo = Arc::clone(&self.session_repo);
        let session_clone = session.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        // The session outliving its user means the account was removed
        self.user_repo
            .find_by_id(&session.user_id)
            .await?
            .ok_or(AuthError::SessionInvalid)
    }
}
