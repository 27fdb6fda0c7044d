//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::issue::Issue;
pub use repository::IssueRepository;
pub use value_object::{IssueContent, IssueStatus, IssueTitle};
