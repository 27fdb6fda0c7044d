//! Issue Error Types
//!
//! Issue-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::{IssueContentError, IssueTitleError};

pub type IssueResult<T> = Result<T, IssueError>;

#[derive(Debug, Error)]
pub enum IssueError {
    #[error("Issue not found")]
    NotFound,

    /// The issue exists but belongs to someone else
    #[error("Issue belongs to another user")]
    Forbidden,

    #[error(transparent)]
    InvalidTitle(#[from] IssueTitleError),

    #[error(transparent)]
    InvalidContent(#[from] IssueContentError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IssueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IssueError::NotFound => ErrorKind::NotFound,
            IssueError::Forbidden => ErrorKind::Forbidden,
            IssueError::InvalidTitle(_) | IssueError::InvalidContent(_) => ErrorKind::BadRequest,
            IssueError::Database(_) | IssueError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            IssueError::NotFound => "ISSUE_NOT_FOUND",
            IssueError::Forbidden => "ISSUE_FORBIDDEN",
            IssueError::InvalidTitle(_) => "INVALID_TITLE",
            IssueError::InvalidContent(_) => "INVALID_CONTENT",
            IssueError::Database(_) | IssueError::Internal(_) => "INTERNAL",
        }
    }

    /// Server details are never exposed
    pub fn to_app_error(&self) -> AppError {
        let message = if self.kind().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        AppError::new(self.kind(), message).with_reason(self.reason())
    }

    pub fn log(&self) {
        match self {
            IssueError::Database(e) => {
                tracing::error!(error = %e, "Issue database error");
            }
            IssueError::Internal(msg) => {
                tracing::error!(message = %msg, "Issue internal error");
            }
            IssueError::Forbidden => {
                tracing::warn!("Issue access by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Issue error");
            }
        }
    }
}

impl From<IssueError> for AppError {
    fn from(err: IssueError) -> Self {
        err.log();
        match err {
            IssueError::Database(e) => AppError::from(e)
                .with_reason("INTERNAL")
                .with_action("Please try again later"),
            other => other.to_app_error(),
        }
    }
}
