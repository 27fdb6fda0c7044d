//! Auth Session Entity
//!
//! Server-side session referenced by a signed bearer token.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{SessionId, UserId};

use crate::domain::value_object::client_info::ClientInfo;

#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: SessionId,
    pub user_id: UserId,
    /// Expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// TTL comes from configuration, not from the entity
    pub fn new(user_id: UserId, client: &ClientInfo, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            session_id: SessionId::new(),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            client_ip: client.ip_string(),
            user_agent: client.user_agent.clone(),
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() >= self.expires_at_ms
    }

    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Sliding expiry: push expiration to `now + ttl` once less than half
    /// of `ttl` remains. Returns whether the session was extended.
    pub fn extend_if_needed(&mut self, ttl: Duration) -> bool {
        let now = Utc::now();
        if self.expires_at_ms < (now + ttl / 2).timestamp_millis() {
            self.expires_at_ms = (now + ttl).timestamp_millis();
            true
        } else {
            false
        }
    }
}
