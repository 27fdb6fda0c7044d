//! Issue tracker client
//!
//! Headless counterpart of the web pages:
//! - [`AuthGateway`] submits `signin` / `createUser` and stores the token
//! - [`TokenStore`] holds the session token (memory or file)
//! - [`AuthForm`] is the sign-in / sign-up page state
//! - [`IssueClient`] wraps the authenticated operations

pub mod documents;
pub mod error;
pub mod form;
pub mod gateway;
pub mod graphql;
pub mod issues;
pub mod navigation;
pub mod token_store;
pub mod types;

// Re-exports for convenience
pub use error::{ClientError, ClientResult};
pub use form::{AuthForm, FormPhase};
pub use gateway::{AuthFailure, AuthGateway, AuthMode};
pub use graphql::{GraphqlRequest, GraphqlResponse, GraphqlTransport, HttpTransport};
pub use issues::IssueClient;
pub use navigation::{HistoryNavigator, Navigator, Route};
pub use token_store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use types::{Credentials, Issue, IssueStatus, NewIssue, User};
