//! User Password Value Object
//!
//! Domain wrapper over `platform::password`. Sign-up input goes through
//! [`RawPassword::new`] (policy enforced); sign-in input through
//! [`RawPassword::for_verification`] (normalized only).

use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

use crate::error::{AuthError, AuthResult};

/// Raw password from user input, zeroized on drop
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a new password (NFKC, 8..=128 code points, no control
    /// characters, no trivially common patterns)
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw).map(Self)
    }

    /// Wrap a submitted sign-in password without applying the policy
    pub fn for_verification(raw: String) -> Self {
        Self(ClearTextPassword::for_verification(raw))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Argon2id hash of a user's password, as stored in `credentials`
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AuthResult<Self> {
        raw.0
            .hash(pepper)
            .map(Self)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Load a PHC string from the database
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        HashedPassword::from_phc_string(phc_string)
            .map(Self)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))
    }

    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time verification; `pepper` must match the one used at sign-up
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_password_policy() {
        assert!(RawPassword::new("ValidPass123!".to_string()).is_ok());
        assert!(matches!(
            RawPassword::new("secret".to_string()),
            Err(PasswordPolicyError::TooShort { .. })
        ));
        assert!(matches!(
            RawPassword::new("password123".to_string()),
            Err(PasswordPolicyError::CommonPattern)
        ));
    }

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw, Some(b"pepper")).unwrap();

        let same = RawPassword::for_verification("TestPassword123!".to_string());
        let wrong = RawPassword::for_verification("WrongPassword123!".to_string());
        assert!(hashed.verify(&same, Some(b"pepper")));
        assert!(!hashed.verify(&same, None));
        assert!(!hashed.verify(&wrong, Some(b"pepper")));

        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&same, Some(b"pepper")));
    }

    #[test]
    fn test_invalid_phc_is_internal() {
        assert!(matches!(
            UserPassword::from_phc_string("plaintext"),
            Err(AuthError::Internal(_))
        ));
    }

    #[test]
    fn test_debug_redaction() {
        let raw = RawPassword::for_verification("SecretPassword123!".to_string());
        assert!(!format!("{:?}", raw).contains("Secret"));
    }
}
