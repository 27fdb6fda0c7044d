//! Issue Content Value Object

use derive_more::Display;
use thiserror::Error;

pub const CONTENT_MAX_LENGTH: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Content must be at most 10000 characters (got {0})")]
pub struct IssueContentError(pub usize);

/// Free-form body; may be empty, stored as written
#[derive(Debug, Clone, PartialEq, Eq, Default, Display)]
#[display("{_0}")]
pub struct IssueContent(String);

impl IssueContent {
    pub fn new(raw: String) -> Result<Self, IssueContentError> {
        let len = raw.chars().count();
        if len > CONTENT_MAX_LENGTH {
            return Err(IssueContentError(len));
        }
        Ok(Self(raw))
    }

    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kept_verbatim() {
        let content = IssueContent::new("  steps:\n1. open\n".to_string()).unwrap();
        assert_eq!(content.as_str(), "  steps:\n1. open\n");
        assert!(IssueContent::new(String::new()).is_ok());
    }

    #[test]
    fn test_content_too_long() {
        assert_eq!(
            IssueContent::new("x".repeat(CONTENT_MAX_LENGTH + 1)),
            Err(IssueContentError(CONTENT_MAX_LENGTH + 1))
        );
    }
}
