//! Issue Title Value Object

use derive_more::Display;
use thiserror::Error;

pub const TITLE_MAX_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssueTitleError {
    #[error("Title cannot be empty")]
    Empty,

    #[error("Title must be at most 200 characters (got {0})")]
    TooLong(usize),
}

/// Trimmed, non-empty, at most [`TITLE_MAX_LENGTH`] characters
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct IssueTitle(String);

impl IssueTitle {
    pub fn new(raw: &str) -> Result<Self, IssueTitleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IssueTitleError::Empty);
        }
        let len = trimmed.chars().count();
        if len > TITLE_MAX_LENGTH {
            return Err(IssueTitleError::TooLong(len));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Trust a value already validated on write
    pub fn from_db(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
