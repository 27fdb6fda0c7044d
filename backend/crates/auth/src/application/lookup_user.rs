//! Lookup User Use Case
//!
//! Resolves an email address to a user for read-only queries.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

pub struct LookupUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> LookupUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// A malformed address matches nobody
    pub async fn by_email(&self, email: &str) -> AuthResult<Option<User>> {
        let Ok(email) = Email::new(email) else {
            return Ok(None);
        };
        self.user_repo.find_by_email(&email).await
    }
}
