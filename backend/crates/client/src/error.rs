//! Client Error Types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("server returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// A GraphQL error entry; `reason` is the server's domain reason
    #[error("{message}")]
    Graphql {
        message: String,
        code: Option<String>,
        reason: Option<String>,
    },

    #[error("missing expected field `{0}`")]
    MissingField(&'static str),

    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("not signed in")]
    NotSignedIn,

    #[error("status is not one the server understands")]
    UnknownStatus,
}

impl ClientError {
    pub fn reason(&self) -> Option<&str> {
        match self {
            ClientError::Graphql { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }

    /// The request never produced a GraphQL response
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Http(_) | ClientError::InvalidHeader(_) | ClientError::HttpStatus { .. }
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
