//! GraphQL Schema
//!
//! The issue tracker's public contract:
//! - Query: `user`, `issues`, `issuesForUser`
//! - Mutation: `createUser`, `signin`, `signout`, `createIssue`,
//!   `updateIssueStatus`, `deleteIssue`
//!
//! Resolvers are thin; they read the caller from [`RequestAuth`] and
//! delegate to the `auth` and `issue` use cases. Failures carry
//! `extensions.code`, `extensions.reason` and, when useful,
//! `extensions.action`.

mod context;
mod error;
mod http;
mod mutation;
mod query;
mod session;
mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use auth::{AuthConfig, AuthStore, MemoryAuthRepository};
use issue::{IssueRepository, MemoryIssueRepository};

pub use context::{AuthServices, IssueServices, RequestAuth};
pub use http::{ClientMeta, GRAPHQL_PATH, graphql_router};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{AuthInput, CreateIssueInput, IssueObject, IssueStatusValue, UserObject};

pub type IssueTrackerSchema<A, I> = Schema<QueryRoot<A, I>, MutationRoot<A, I>, EmptySubscription>;

/// Deepest selection accepted (`user { issues { ... } }` needs 3)
const MAX_QUERY_DEPTH: usize = 10;

pub fn build_schema<A, I>(auth_store: A, issue_repo: I, config: AuthConfig) -> IssueTrackerSchema<A, I>
where
    A: AuthStore,
    I: IssueRepository + Sync + 'static,
{
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(AuthServices {
        store: Arc::new(auth_store),
        config: Arc::new(config),
    })
    .data(IssueServices {
        repo: Arc::new(issue_repo),
    })
    .limit_depth(MAX_QUERY_DEPTH)
    .finish()
}

/// Schema definition language of the contract
pub fn sdl() -> String {
    build_schema(
        MemoryAuthRepository::new(),
        MemoryIssueRepository::new(),
        AuthConfig::default(),
    )
    .sdl()
}
