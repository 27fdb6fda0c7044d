//! Email Value Object
//!
//! Represents a validated, normalized email address. Emails are the login
//! identifier, so normalization (trim + lowercase) must be identical at
//! sign-up and sign-in.

use derive_more::Display;
use std::str::FromStr;
use thiserror::Error;

/// Maximum email length (per RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

const LOCAL_PART_MAX_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,
    #[error("Email must be at most 254 characters")]
    TooLong,
    #[error("Invalid email format")]
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Email(String);

impl Email {
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailError> {
        let email = email.as_ref().trim().to_lowercase();

        if email.is_empty() {
            return Err(EmailError::Empty);
        }
        if email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong);
        }
        if !is_valid_format(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_format(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > LOCAL_PART_MAX_LENGTH || local.contains(char::is_whitespace)
    {
        return false;
    }

    // Exactly one '@', dotted domain of letters, digits and hyphens
    if domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Email::new(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("a@b.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@sub-domain.example.com").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert_eq!(Email::new(""), Err(EmailError::Empty));
        assert_eq!(Email::new("   "), Err(EmailError::Empty));
        assert_eq!(Email::new("userexample.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@example"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@example..com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("user@-example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("us er@example.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("user@{}.com", "a".repeat(EMAIL_MAX_LENGTH));
        assert_eq!(Email::new(email), Err(EmailError::TooLong));
    }

    #[test]
    fn test_email_normalization() {
        let email = Email::new("  User@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
        assert_eq!(email.to_string(), "user@example.com");
        assert_eq!(email, "USER@example.com".parse().unwrap());
    }
}
