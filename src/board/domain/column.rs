//! Pipeline column identifiers.

use super::ParseColumnIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four fixed pipeline stages.
///
/// The set is closed: any stage name outside it fails to parse, so commands
/// can never address a column the board does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnId {
    /// Work that has not started.
    Todo,
    /// Work being carried out.
    InProgress,
    /// Work awaiting review.
    Review,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// All columns in display order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical snapshot key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Returns the zero-based display position.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Done => 3,
        }
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "todo" => Ok(Self::Todo),
            "inProgress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

impl FromStr for ColumnId {
    type Err = ParseColumnIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
