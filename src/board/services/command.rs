//! Command values accepted by the board store.

use crate::board::domain::{ActivityDraft, ActivityId, ColumnId};
use serde::{Deserialize, Serialize};

/// One of the five board mutations.
///
/// The display layer translates gestures (drops, menu actions, form
/// submissions) into commands and hands them to
/// [`BoardStore::apply`](super::BoardStore::apply).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BoardCommand {
    /// Relocate an activity to the tail of another column.
    Move {
        /// Activity to move.
        activity: ActivityId,
        /// Column currently holding the activity.
        from: ColumnId,
        /// Destination column.
        to: ColumnId,
    },
    /// Change an activity's position within one column.
    Reorder {
        /// Column to reorder.
        column: ColumnId,
        /// Current position.
        from_index: usize,
        /// Target position.
        to_index: usize,
    },
    /// Append a new activity.
    Add {
        /// Destination column.
        column: ColumnId,
        /// Activity fields.
        draft: ActivityDraft,
    },
    /// Replace the fields of an existing activity.
    Edit {
        /// Column holding the activity.
        column: ColumnId,
        /// Activity to update.
        activity: ActivityId,
        /// New field values.
        draft: ActivityDraft,
    },
    /// Remove an activity.
    Delete {
        /// Column holding the activity.
        column: ColumnId,
        /// Activity to remove.
        activity: ActivityId,
    },
}

impl BoardCommand {
    /// Returns the command name used in log events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Reorder { .. } => "reorder",
            Self::Add { .. } => "add",
            Self::Edit { .. } => "edit",
            Self::Delete { .. } => "delete",
        }
    }
}
