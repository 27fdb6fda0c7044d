//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - PostgreSQL and in-memory implementations
//!
//! ## Features
//! - Sign-up/sign-in with email + password
//! - Server-side sessions referenced by signed bearer tokens
//! - Sliding session expiry
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (NIST SP 800-63B oriented)
//! - Tokens are HMAC-signed; forged tokens never reach the database
//! - Automatic lockout after failed login attempts
//! - Unknown email and wrong password are indistinguishable

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::repository::AuthStore;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::MemoryAuthRepository, postgres::PgAuthRepository};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}

pub mod usecase {
    pub use crate::application::{
        AuthenticatedUser, CheckSessionUseCase, LookupUserUseCase, SignInInput, SignInUseCase,
        SignOutUseCase, SignUpInput, SignUpUseCase,
    };
}

#[cfg(test)]
mod tests;
