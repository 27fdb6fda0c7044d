//! Error conversions
//!
//! Conversions from infrastructure errors into [`AppError`] and from
//! [`AppError`] into GraphQL errors.

use super::app_error::AppError;
#[cfg(any(test, feature = "sqlx"))]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let kind = match db_err.code().as_deref() {
                    Some("23503" | "23505") => ErrorKind::Conflict,
                    Some("23502" | "23514") => ErrorKind::BadRequest,
                    Some(code) if code.starts_with("53") || code.starts_with("57") => {
                        ErrorKind::ServiceUnavailable
                    }
                    _ => ErrorKind::InternalServerError,
                };
                AppError::new(kind, "Database error").with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// GraphQL conversions (feature-gated)
// ============================================================================

/// Renders the error as a GraphQL error whose extensions carry
/// `code`, `reason` and `action`.
#[cfg(feature = "graphql")]
impl async_graphql::ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.message()).extend_with(|_, ext| {
            ext.set("code", self.kind().code().to_string());
            if let Some(reason) = self.reason() {
                ext.set("reason", reason.to_string());
            }
            if let Some(action) = self.action() {
                ext.set("action", action.to_string());
            }
        })
    }
}
