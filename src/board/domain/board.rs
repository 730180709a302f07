//! Board aggregate root.

use super::{
    Activity, ActivityId, BoardError, BoardResult, ColumnId, ValidatedActivity, ValidationErrors,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Snapshot of all four columns.
///
/// Every activity identifier appears in at most one column. Mutating methods
/// check all of their preconditions before touching any column, so a failed
/// call leaves the board unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardColumns", into = "BoardColumns")]
pub struct Board {
    todo: Vec<Activity>,
    in_progress: Vec<Activity>,
    review: Vec<Activity>,
    done: Vec<Activity>,
}

/// Wire shape of a board: one key per column, all required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct BoardColumns {
    todo: Vec<Activity>,
    in_progress: Vec<Activity>,
    review: Vec<Activity>,
    done: Vec<Activity>,
}

impl TryFrom<BoardColumns> for Board {
    type Error = BoardError;

    fn try_from(columns: BoardColumns) -> Result<Self, Self::Error> {
        Self::from_columns(
            columns.todo,
            columns.in_progress,
            columns.review,
            columns.done,
        )
    }
}

impl From<Board> for BoardColumns {
    fn from(board: Board) -> Self {
        Self {
            todo: board.todo,
            in_progress: board.in_progress,
            review: board.review,
            done: board.done,
        }
    }
}

impl Board {
    /// Creates a board with four empty columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from complete column contents.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateActivity`] when an identifier occurs
    /// more than once across the columns, or [`BoardError::Validation`] when
    /// an activity has a blank title or assignee.
    pub fn from_columns(
        todo: Vec<Activity>,
        in_progress: Vec<Activity>,
        review: Vec<Activity>,
        done: Vec<Activity>,
    ) -> BoardResult<Self> {
        let board = Self {
            todo,
            in_progress,
            review,
            done,
        };

        let mut seen = HashSet::with_capacity(board.len());
        for activity in board.activities() {
            if !seen.insert(activity.id()) {
                return Err(BoardError::DuplicateActivity(activity.id()));
            }
            let blank = activity.blank_fields();
            if !blank.is_empty() {
                return Err(ValidationErrors::new(blank).into());
            }
        }
        Ok(board)
    }

    /// Returns the ordered activities of `column`.
    #[must_use]
    pub fn column(&self, column: ColumnId) -> &[Activity] {
        match column {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Review => &self.review,
            ColumnId::Done => &self.done,
        }
    }

    const fn column_mut(&mut self, column: ColumnId) -> &mut Vec<Activity> {
        match column {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Review => &mut self.review,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Iterates over all columns in display order.
    pub fn columns(&self) -> impl Iterator<Item = (ColumnId, &[Activity])> {
        ColumnId::ALL
            .into_iter()
            .map(move |column| (column, self.column(column)))
    }

    /// Iterates over every activity, column by column.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.columns().flat_map(|(_, activities)| activities.iter())
    }

    /// Returns the total number of activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.review.len() + self.done.len()
    }

    /// Returns `true` when every column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of activities in `column`.
    #[must_use]
    pub fn column_len(&self, column: ColumnId) -> usize {
        self.column(column).len()
    }

    /// Returns `true` when `id` is used anywhere on the board.
    #[must_use]
    pub fn contains(&self, id: ActivityId) -> bool {
        self.activities().any(|activity| activity.id() == id)
    }

    /// Returns the column and position holding `id`.
    #[must_use]
    pub fn locate(&self, id: ActivityId) -> Option<(ColumnId, usize)> {
        self.columns().find_map(|(column, activities)| {
            activities
                .iter()
                .position(|activity| activity.id() == id)
                .map(|index| (column, index))
        })
    }

    /// Returns the activity with `id`, wherever it is.
    #[must_use]
    pub fn find(&self, id: ActivityId) -> Option<&Activity> {
        self.activities().find(|activity| activity.id() == id)
    }

    /// Returns the highest identifier on the board.
    #[must_use]
    pub fn max_id(&self) -> Option<ActivityId> {
        self.activities().map(Activity::id).max()
    }

    /// Returns the position of `id` within `column`.
    #[must_use]
    pub fn position_in(&self, column: ColumnId, id: ActivityId) -> Option<usize> {
        self.column(column)
            .iter()
            .position(|activity| activity.id() == id)
    }

    /// Moves an activity to the tail of another column.
    ///
    /// Moving within the same column is a no-op, whether or not the
    /// activity is present.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when `id` is not in `from`.
    pub fn move_activity(
        &mut self,
        id: ActivityId,
        from: ColumnId,
        to: ColumnId,
    ) -> BoardResult<()> {
        if from == to {
            return Ok(());
        }
        let index = self.position_in(from, id).ok_or(BoardError::NotFound {
            activity: id,
            column: from,
        })?;
        let activity = self.column_mut(from).remove(index);
        self.column_mut(to).push(activity);
        Ok(())
    }

    /// Moves the activity at `from_index` to `to_index` within one column.
    ///
    /// `from_index` must address an existing activity. `to_index` may range
    /// up to the column length; the element is removed before reinsertion,
    /// so the column length is equivalent to the last position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] for either bound violation.
    pub fn reorder(
        &mut self,
        column: ColumnId,
        from_index: usize,
        to_index: usize,
    ) -> BoardResult<()> {
        let len = self.column_len(column);
        if from_index >= len {
            return Err(BoardError::IndexOutOfRange {
                column,
                index: from_index,
                len,
            });
        }
        if to_index > len {
            return Err(BoardError::IndexOutOfRange {
                column,
                index: to_index,
                len,
            });
        }

        let activities = self.column_mut(column);
        let activity = activities.remove(from_index);
        let target = to_index.min(activities.len());
        activities.insert(target, activity);
        Ok(())
    }

    /// Appends an activity to the tail of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateActivity`] when the identifier is
    /// already on the board.
    pub fn append(&mut self, column: ColumnId, activity: Activity) -> BoardResult<()> {
        if self.contains(activity.id()) {
            return Err(BoardError::DuplicateActivity(activity.id()));
        }
        self.column_mut(column).push(activity);
        Ok(())
    }

    /// Replaces the fields of an activity in place, keeping its identifier
    /// and position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when `id` is not in `column`.
    pub fn replace(
        &mut self,
        column: ColumnId,
        id: ActivityId,
        fields: ValidatedActivity,
    ) -> BoardResult<()> {
        let slot = self
            .column_mut(column)
            .iter_mut()
            .find(|activity| activity.id() == id)
            .ok_or(BoardError::NotFound {
                activity: id,
                column,
            })?;
        *slot = fields.into_activity(id);
        Ok(())
    }

    /// Removes an activity from `column`, returning it when it was present.
    pub fn remove(&mut self, column: ColumnId, id: ActivityId) -> Option<Activity> {
        let index = self.position_in(column, id)?;
        Some(self.column_mut(column).remove(index))
    }
}
