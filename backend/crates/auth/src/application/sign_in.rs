//! Sign In Use Case
//!
//! Authenticates a user by email and password and opens a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::{AuthenticatedUser, open_session};
use crate::domain::repository::{AuthSessionRepository, CredentialRepository, UserRepository};
use crate::domain::value_object::{
    client_info::ClientInfo, email::Email, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

pub struct SignInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, C, S> SignInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: AuthSessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        credential_repo: Arc<C>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: SignInInput,
        client: ClientInfo,
    ) -> AuthResult<AuthenticatedUser> {
        // Malformed and unknown emails look exactly like a wrong password
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;
        let mut user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let mut credential = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Credential not found".to_string()))?;

        if credential.is_locked() {
            return Err(AuthError::AccountLocked);
        }

        let raw_password = RawPassword::for_verification(input.password);
        if !credential
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            credential.record_failure();
            self.credential_repo.update(&credential).await?;
            if credential.is_locked() {
                tracing::warn!(
                    public_id = %user.public_id,
                    failures = credential.login_failed_count,
                    "Account locked after repeated login failures"
                );
            }
            return Err(AuthError::InvalidCredentials);
        }

        if credential.login_failed_count > 0 || credential.locked_until.is_some() {
            credential.reset_failures();
            self.credential_repo.update(&credential).await?;
        }

        user.record_login();
        self.user_repo.update(&user).await?;

        tracing::info!(public_id = %user.public_id, "User signed in");

        open_session(&*self.session_repo, &self.config, user, &client).await
    }
}
