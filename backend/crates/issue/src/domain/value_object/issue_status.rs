//! Issue Status Value Object
//!
//! Four-stage workflow. Any status may move to any other; the board is
//! the user's to arrange.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i16)]
pub enum IssueStatus {
    /// Not yet planned
    #[default]
    Backlog = 0,
    Todo = 1,
    InProgress = 2,
    Done = 3,
}

impl IssueStatus {
    pub const ALL: [IssueStatus; 4] = [Self::Backlog, Self::Todo, Self::InProgress, Self::Done];

    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Wire code, as used by the GraphQL enum
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(Self::Backlog),
            1 => Some(Self::Todo),
            2 => Some(Self::InProgress),
            3 => Some(Self::Done),
            _ => None,
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
