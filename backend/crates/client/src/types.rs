//! Wire types as returned by the server

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
    /// A status added on the server after this client was built; never sent
    #[serde(other)]
    Unknown,
}

impl IssueStatus {
    pub fn is_known(&self) -> bool {
        !matches!(self, IssueStatus::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: String,
    /// Only present right after `signin` / `createUser`
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: IssueStatus,
    pub user_id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub content: String,
    pub status: IssueStatus,
}

/// `AuthInput`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
