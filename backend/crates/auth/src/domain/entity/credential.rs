//! Credential Entity
//!
//! Password hash and login failure tracking for a user.
//! Separated from [`super::user::User`] to isolate sensitive data.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;

use crate::domain::value_object::user_password::UserPassword;

#[derive(Debug, Clone)]
pub struct Credential {
    pub user_id: UserId,
    pub password_hash: UserPassword,
    /// Consecutive failures since the last success or expired lock
    pub login_failed_count: u16,
    pub last_failed_at: Option<DateTime<Utc>>,
    pub locked_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// Failures before temporary lockout
    pub const MAX_LOGIN_FAILURES: u16 = 5;
    pub const LOCKOUT_MINUTES: i64 = 15;

    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            password_hash,
            login_failed_count: 0,
            last_failed_at: None,
            locked_until: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked_until.is_some_and(|until| Utc::now() < until)
    }

    /// Record a failed attempt, locking once the limit is reached
    ///
    /// A lock that has already expired starts a fresh count.
    pub fn record_failure(&mut self) {
        let now = Utc::now();
        if self.locked_until.is_some_and(|until| until <= now) {
            self.login_failed_count = 0;
            self.locked_until = None;
        }

        self.login_failed_count = self.login_failed_count.saturating_add(1);
        self.last_failed_at = Some(now);
        self.updated_at = now;

        if self.login_failed_count >= Self::MAX_LOGIN_FAILURES {
            self.locked_until = Some(now + Duration::minutes(Self::LOCKOUT_MINUTES));
        }
    }

    pub fn reset_failures(&mut self) {
        self.login_failed_count = 0;
        self.last_failed_at = None;
        self.locked_until = None;
        self.updated_at = Utc::now();
    }
}
