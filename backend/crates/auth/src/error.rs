//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordPolicyError;
use thiserror::Error;

use crate::domain::value_object::email::EmailError;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// No session token was presented
    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Email is already registered")]
    EmailTaken,

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is temporarily locked")]
    AccountLocked,

    /// Token forged, malformed, expired or revoked
    #[error("Session not found or expired")]
    SessionInvalid,

    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    PasswordValidation(#[from] PasswordPolicyError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::NotAuthenticated
            | AuthError::InvalidCredentials
            | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::AccountLocked => ErrorKind::Locked,
            AuthError::InvalidEmail(_) | AuthError::PasswordValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Stable machine-readable reason exposed to clients
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::NotAuthenticated => "NOT_AUTHENTICATED",
            AuthError::EmailTaken => "EMAIL_TAKEN",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::AccountLocked => "ACCOUNT_LOCKED",
            AuthError::SessionInvalid => "SESSION_INVALID",
            AuthError::InvalidEmail(_) => "INVALID_EMAIL",
            AuthError::PasswordValidation(_) => "INVALID_PASSWORD",
            AuthError::Database(_) | AuthError::Internal(_) => "INTERNAL",
        }
    }

    fn action(&self) -> Option<&'static str> {
        match self {
            AuthError::NotAuthenticated | AuthError::SessionInvalid => {
                Some("Please sign in again")
            }
            AuthError::EmailTaken => Some("Sign in instead, or use a different email"),
            AuthError::InvalidCredentials => Some("Check your email and password"),
            AuthError::AccountLocked => Some("Please try again in 15 minutes"),
            AuthError::PasswordValidation(_) => Some("Please choose a different password"),
            AuthError::InvalidEmail(_) => Some("Please enter a valid email address"),
            AuthError::Database(_) | AuthError::Internal(_) => None,
        }
    }

    /// Convert to AppError without consuming; server details are never exposed
    pub fn to_app_error(&self) -> AppError {
        let message = if self.kind().is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        let err = AppError::new(self.kind(), message).with_reason(self.reason());
        match self.action() {
            Some(action) => err.with_action(action),
            None => err,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountLocked => {
                tracing::warn!("Login attempt on locked account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.log();
        match err {
            // Keep the driver error as source so pool exhaustion surfaces as 503
            AuthError::Database(e) => AppError::from(e)
                .with_reason("INTERNAL")
                .with_action("Please try again later"),
            other => other.to_app_error(),
        }
    }
}
