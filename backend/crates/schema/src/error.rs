//! Resolver error rendering

use async_graphql::ErrorExtensions;
use kernel::error::app_error::AppError;

/// Render a domain error with `code`, `reason` and `action` extensions
pub(crate) fn gql_error(err: impl Into<AppError>) -> async_graphql::Error {
    let err: AppError = err.into();
    err.extend()
}
