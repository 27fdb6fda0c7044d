//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC key for session tokens (32 bytes)
    pub session_secret: [u8; 32],
    /// Session lifetime; sessions slide forward once half of it has elapsed
    pub session_ttl: Duration,
    /// Application-wide secret appended to passwords before hashing
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    ///
    /// Tokens issued under a random secret do not survive a restart.
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Session TTL as a chrono duration; out-of-range values fall back to one week
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or_else(|_| chrono::Duration::days(7))
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
