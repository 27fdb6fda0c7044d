//! Session issuance shared by sign-up and sign-in

use crate::application::config::AuthConfig;
use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::AuthSessionRepository;
use crate::domain::value_object::{client_info::ClientInfo, session_token::SessionToken};
use crate::error::AuthResult;

/// A user together with a freshly issued session token
///
/// Only produced by sign-up and sign-in; the token is never stored.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub session_token: SessionToken,
}

/// Create a session row for `user` and sign a token referencing it
pub(crate) async fn open_session<S: AuthSessionRepository>(
    session_repo: &S,
    config: &AuthConfig,
    user: User,
    client: &ClientInfo,
) -> AuthResult<AuthenticatedUser> {
    let session = AuthSession::new(user.user_id, client, config.session_ttl_chrono());
    let session_token = SessionToken::sign(session.session_id, &config.session_secret)?;
    session_repo.create(&session).await?;

    tracing::debug!(
        public_id = %user.public_id,
        session_id = %session.session_id,
        expires_at_ms = session.expires_at_ms,
        "Session opened"
    );

    Ok(AuthenticatedUser {
        user,
        session_token,
    })
}
