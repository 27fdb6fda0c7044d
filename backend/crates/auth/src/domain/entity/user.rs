//! User Entity
//!
//! Account profile. Password material lives in [`super::credential::Credential`].

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::public_id::UserPublicId;

use crate::domain::value_object::email::Email;

#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier, never exposed
    pub user_id: UserId,
    /// Public-facing nanoid identifier (`User.id` on the wire)
    pub public_id: UserPublicId,
    /// Login identifier, unique
    pub email: Email,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: Email) -> Self {
        let now = Utc::now();
        Self {
            user_id: UserId::new(),
            public_id: UserPublicId::new(),
            email,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}
