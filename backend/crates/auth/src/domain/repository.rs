//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use kernel::id::{SessionId, UserId};

use crate::domain::entity::{auth_session::AuthSession, credential::Credential, user::User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a user together with its credential, atomically
    ///
    /// Fails with `AuthError::EmailTaken` if the email is already registered.
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    async fn update(&self, user: &User) -> AuthResult<()>;
}

#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;

    async fn update(&self, credential: &Credential) -> AuthResult<()>;
}

#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>>;

    /// Persist activity time and expiration
    async fn update(&self, session: &AuthSession) -> AuthResult<()>;

    /// Returns whether a session was deleted
    async fn delete(&self, session_id: &SessionId) -> AuthResult<bool>;

    /// Delete every expired session, returning how many were removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}

/// A single store backing every auth repository
///
/// Implemented automatically for any cloneable type that implements all three.
pub trait AuthStore:
    UserRepository + CredentialRepository + AuthSessionRepository + Clone + Sync + 'static
{
}

impl<T> AuthStore for T where
    T: UserRepository + CredentialRepository + AuthSessionRepository + Clone + Sync + 'static
{
}
