//! Typed public identifiers
//!
//! Public ids are the only identifiers exposed over the API. They are
//! 21 character nanoids, typed by the same markers as [`crate::id::Id`] so a
//! user id can never be used to look up an issue.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use nid::Nanoid;

/// Error returned when a string is not a valid public id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid public id: {0}")]
pub struct PublicIdError(String);

pub struct PublicId<T> {
    value: Nanoid,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PublicId<T> {
    pub fn new() -> Self {
        Self {
            value: Nanoid::new(),
            _marker: PhantomData,
        }
    }

    /// Parse a public id received from a client or loaded from storage
    pub fn parse_str(value: &str) -> Result<Self, PublicIdError> {
        let value = Nanoid::from_str(value).map_err(|e| PublicIdError(e.to_string()))?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

impl<T> Clone for PublicId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PublicId<T> {}

impl<T> PartialEq for PublicId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for PublicId<T> {}

impl<T> Hash for PublicId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for PublicId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for PublicId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicId({})", self.as_str())
    }
}

impl<T> fmt::Display for PublicId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> FromStr for PublicId<T> {
    type Err = PublicIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

pub mod markers {
    pub use crate::id::markers::User;
    pub struct Issue;
}

pub type UserPublicId = PublicId<markers::User>;
pub type IssuePublicId = PublicId<markers::Issue>;
