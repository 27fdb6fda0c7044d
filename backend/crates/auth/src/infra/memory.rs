//! In-memory Repository Implementation
//!
//! Process-local store with the same semantics as [`super::postgres`].
//! Used by tests and by anything that needs auth without a database.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{SessionId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::{auth_session::AuthSession, credential::Credential, user::User};
use crate::domain::repository::{AuthSessionRepository, CredentialRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    users: HashMap<UserId, User>,
    credentials: HashMap<UserId, Credential>,
    sessions: HashMap<SessionId, AuthSession>,
}

/// Cheap to clone; clones share the same state
#[derive(Clone, Default)]
pub struct MemoryAuthRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for MemoryAuthRepository {
    async fn create(&self, user: &User, credential: &Credential) -> AuthResult<()> {
        let mut state = self.state.write().await;
        if state.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }
        state.users.insert(user.user_id, user.clone());
        state.credentials.insert(credential.user_id, credential.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.state.read().await.users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|u| &u.email == email))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.users.get_mut(&user.user_id) {
            *existing = user.clone();
        }
        Ok(())
    }
}

impl CredentialRepository for MemoryAuthRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        Ok(self.state.read().await.credentials.get(user_id).cloned())
    }

    async fn update(&self, credential: &Credential) -> AuthResult<()> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.credentials.get_mut(&credential.user_id) {
            *existing = credential.clone();
        }
        Ok(())
    }
}

impl AuthSessionRepository for MemoryAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        let mut state = self.state.write().await;
        state.sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>> {
        Ok(self.state.read().await.sessions.get(session_id).cloned())
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        let mut state = self.state.write().await;
        if let Some(existing) = state.sessions.get_mut(&session.session_id) {
            existing.expires_at_ms = session.expires_at_ms;
            existing.last_activity_at = session.last_activity_at;
        }
        Ok(())
    }

    async fn delete(&self, session_id: &SessionId) -> AuthResult<bool> {
        Ok(self.state.write().await.sessions.remove(session_id).is_some())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();
        let mut state = self.state.write().await;
        let before = state.sessions.len();
        state.sessions.retain(|_, s| s.expires_at_ms > now_ms);
        Ok((before - state.sessions.len()) as u64)
    }
}
