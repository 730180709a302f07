//! Error types for board commands, validation, and parsing.

use super::{ActivityId, ColumnId};
use std::fmt;
use thiserror::Error;

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Typed failures returned by board commands.
///
/// A command that fails leaves the board exactly as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The activity is not present in the expected column.
    #[error("activity {activity} not found in column {column}")]
    NotFound {
        /// Referenced activity.
        activity: ActivityId,
        /// Column that was searched.
        column: ColumnId,
    },

    /// A reorder index lies outside the column bounds.
    #[error("index {index} out of range for column {column} with {len} activities")]
    IndexOutOfRange {
        /// Column being reordered.
        column: ColumnId,
        /// Offending index.
        index: usize,
        /// Column length when the command was issued.
        len: usize,
    },

    /// The activity payload is missing required fields.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The identifier is already used somewhere on the board.
    #[error("duplicate activity identifier: {0}")]
    DuplicateActivity(ActivityId),

    /// The identity source kept returning identifiers already on the board.
    #[error("no unused activity identifier after {attempts} attempts")]
    IdSpaceExhausted {
        /// Number of identifiers drawn before giving up.
        attempts: usize,
    },
}

/// Required activity field that may be reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    /// Display title.
    Title,
    /// Owner name.
    Assignee,
    /// Scheduled start.
    StartDate,
    /// Scheduled end.
    EndDate,
}

impl ActivityField {
    /// Returns the field name as used in board snapshots.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Assignee => "assignee",
            Self::StartDate => "startDate",
            Self::EndDate => "endDate",
        }
    }
}

impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every required field missing from an activity payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("missing required activity fields: {}", join_fields(.missing))]
pub struct ValidationErrors {
    missing: Vec<ActivityField>,
}

impl ValidationErrors {
    /// Creates a validation failure for the given fields.
    #[must_use]
    pub const fn new(missing: Vec<ActivityField>) -> Self {
        Self { missing }
    }

    /// Returns the missing fields in declaration order.
    #[must_use]
    pub fn missing(&self) -> &[ActivityField] {
        &self.missing
    }

    /// Returns `true` when `field` is among the missing fields.
    #[must_use]
    pub fn is_missing(&self, field: ActivityField) -> bool {
        self.missing.contains(&field)
    }
}

fn join_fields(fields: &[ActivityField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error returned while parsing a column identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnIdError(pub String);

/// Error returned while parsing a priority.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
