//! Session Token Value Object
//!
//! Bearer token handed to clients after authentication:
//! `<session uuid>.<base64url(HMAC-SHA256(session uuid))>`.
//! The server keeps only the session row; the signature lets forged or
//! foreign tokens be rejected before touching the database.

use std::fmt;

use kernel::id::SessionId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Sign a session id with the server secret
    pub fn sign(session_id: SessionId, secret: &[u8]) -> AuthResult<Self> {
        let id = session_id.to_string();
        let signature =
            hmac_sha256(secret, id.as_bytes()).map_err(|e| AuthError::Internal(e.to_string()))?;
        Ok(Self(format!("{}.{}", id, to_base64url(&signature))))
    }

    /// Verify a presented token and return the session id it names
    ///
    /// Every failure is reported as [`AuthError::SessionInvalid`].
    pub fn verify(token: &str, secret: &[u8]) -> AuthResult<SessionId> {
        let (id, signature_b64) = token.split_once('.').ok_or(AuthError::SessionInvalid)?;
        let signature = from_base64url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;

        if !verify_hmac_sha256(secret, id.as_bytes(), &signature) {
            return Err(AuthError::SessionInvalid);
        }

        let uuid: Uuid = id.parse().map_err(|_| AuthError::SessionInvalid)?;
        Ok(SessionId::from_uuid(uuid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}
