//! Sign Up Use Case
//!
//! Creates a new account and opens its first session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::{AuthenticatedUser, open_session};
use crate::domain::entity::{credential::Credential, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    client_info::ClientInfo,
    email::Email,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

pub struct SignUpUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignUpUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: SignUpInput,
        client: ClientInfo,
    ) -> AuthResult<AuthenticatedUser> {
        let email = Email::new(&input.email)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;
        let user = User::new(email);
        let credential = Credential::new(user.user_id, password_hash);

        // A concurrent sign-up with the same email loses here with EmailTaken
        self.user_repo.create(&user, &credential).await?;

        tracing::info!(public_id = %user.public_id, "User signed up");

        open_session(&*self.session_repo, &self.config, user, &client).await
    }
}
