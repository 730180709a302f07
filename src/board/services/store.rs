//! Board store: the single writer of the canonical board snapshot.

use super::BoardCommand;
use crate::board::{
    domain::{ActivityDraft, ActivityId, Board, BoardError, BoardResult, ColumnId},
    ports::{ActivityIdSource, SnapshotResult, SnapshotSource},
};
use tracing::{debug, warn};

/// Number of identity-source candidates drawn before `add` gives up.
const MAX_ID_ATTEMPTS: usize = 64;

/// Owns one board snapshot and applies commands to it one at a time.
///
/// Every command either succeeds and returns the updated snapshot, or fails
/// with a [`BoardError`] and leaves the snapshot untouched.
///
/// # Examples
///
/// ```
/// use activity_board::board::{
///     adapters::SequentialIdSource,
///     domain::{ActivityDraft, Board, ColumnId},
///     services::BoardStore,
/// };
/// use chrono::Utc;
///
/// let mut store = BoardStore::new(Board::new(), SequentialIdSource::default());
/// let now = Utc::now();
/// let id = store
///     .add(ColumnId::Todo, ActivityDraft::new("Write notes", "Sam").with_schedule(now, now))
///     .expect("valid draft");
///
/// store.move_activity(id, ColumnId::Todo, ColumnId::Done).expect("activity present");
/// assert_eq!(store.snapshot().column_len(ColumnId::Done), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BoardStore<I>
where
    I: ActivityIdSource,
{
    board: Board,
    ids: I,
}

impl<I> BoardStore<I>
where
    I: ActivityIdSource,
{
    /// Creates a store over an initial snapshot.
    #[must_use]
    pub const fn new(board: Board, ids: I) -> Self {
        Self { board, ids }
    }

    /// Creates a store from a snapshot supplier.
    ///
    /// # Errors
    ///
    /// Returns the supplier's [`SnapshotError`](crate::board::ports::SnapshotError)
    /// when the snapshot cannot be loaded.
    pub fn open(source: &impl SnapshotSource, ids: I) -> SnapshotResult<Self> {
        Ok(Self::new(source.load()?, ids))
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Board {
        &self.board
    }

    /// Consumes the store, returning the current snapshot.
    #[must_use]
    pub fn into_snapshot(self) -> Board {
        self.board
    }

    /// Moves an activity to the tail of another column.
    ///
    /// Moving to the same column succeeds without changing the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotFound`] when the activity is not in `from`.
    pub fn move_activity(
        &mut self,
        id: ActivityId,
        from: ColumnId,
        to: ColumnId,
    ) -> BoardResult<&Board> {
        self.board
            .move_activity(id, from, to)
            .inspect_err(|err| warn!(command = "move", error = %err, "board command rejected"))?;
        debug!(activity = %id, %from, %to, "moved activity");
        Ok(&self.board)
    }

    /// Moves the activity at `from_index` to `to_index` within `column`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] when `from_index` is not a
    /// valid position or `to_index` exceeds the column length.
    pub fn reorder(
        &mut self,
        column: ColumnId,
        from_index: usize,
        to_index: usize,
    ) -> BoardResult<&Board> {
        self.board
            .reorder(column, from_index, to_index)
            .inspect_err(|err| warn!(command = "reorder", error = %err, "board command rejected"))?;
        debug!(%column, from_index, to_index, "reordered column");
        Ok(&self.board)
    }

    /// Appends a new activity to `column`, assigning it a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the draft lacks a required
    /// field, or [`BoardError::IdSpaceExhausted`] when the identity source
    /// only produced identifiers already on the board.
    pub fn add(&mut self, column: ColumnId, draft: ActivityDraft) -> BoardResult<ActivityId> {
        let fields = draft
            .validate()
            .map_err(BoardError::from)
            .inspect_err(|err| warn!(command = "add", error = %err, "board command rejected"))?;
        let id = self
            .allocate_id()
            .inspect_err(|err| warn!(command = "add", error = %err, "board command rejected"))?;
        self.board.append(column, fields.into_activity(id))?;
        debug!(activity = %id, %column, "added activity");
        Ok(id)
    }

    /// Appends a new activity under a caller-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the draft lacks a required
    /// field, or [`BoardError::DuplicateActivity`] when `id` is already on
    /// the board.
    pub fn add_with_id(
        &mut self,
        column: ColumnId,
        id: ActivityId,
        draft: ActivityDraft,
    ) -> BoardResult<&Board> {
        let fields = draft
            .validate()
            .map_err(BoardError::from)
            .and_then(|fields| {
                if self.board.contains(id) {
                    Err(BoardError::DuplicateActivity(id))
                } else {
                    Ok(fields)
                }
            })
            .inspect_err(|err| warn!(command = "add", error = %err, "board command rejected"))?;
        self.board.append(column, fields.into_activity(id))?;
        debug!(activity = %id, %column, "added activity");
        Ok(&self.board)
    }

    /// Replaces the fields of an activity in `column`, keeping its
    /// identifier and position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] when the draft lacks a required
    /// field, or [`BoardError::NotFound`] when the activity is not in
    /// `column`.
    pub fn edit(
        &mut self,
        column: ColumnId,
        id: ActivityId,
        draft: ActivityDraft,
    ) -> BoardResult<&Board> {
        draft
            .validate()
            .map_err(BoardError::from)
            .and_then(|fields| self.board.replace(column, id, fields))
            .inspect_err(|err| warn!(command = "edit", error = %err, "board command rejected"))?;
        debug!(activity = %id, %column, "edited activity");
        Ok(&self.board)
    }

    /// Removes an activity from `column`.
    ///
    /// Deleting an activity that is not in the column succeeds without
    /// changing the board.
    ///
    /// # Errors
    ///
    /// This command does not fail; the `Result` keeps all commands uniform.
    pub fn delete(&mut self, column: ColumnId, id: ActivityId) -> BoardResult<&Board> {
        if self.board.remove(column, id).is_some() {
            debug!(activity = %id, %column, "deleted activity");
        } else {
            debug!(activity = %id, %column, "delete of absent activity ignored");
        }
        Ok(&self.board)
    }

    /// Applies a command value.
    ///
    /// # Errors
    ///
    /// Returns the same errors as the corresponding command method.
    pub fn apply(&mut self, command: BoardCommand) -> BoardResult<&Board> {
        debug!(command = command.name(), "applying board command");
        match command {
            BoardCommand::Move { activity, from, to } => self.move_activity(activity, from, to),
            BoardCommand::Reorder {
                column,
                from_index,
                to_index,
            } => self.reorder(column, from_index, to_index),
            BoardCommand::Add { column, draft } => {
                self.add(column, draft)?;
                Ok(&self.board)
            }
            BoardCommand::Edit {
                column,
                activity,
                draft,
            } => self.edit(column, activity, draft),
            BoardCommand::Delete { column, activity } => self.delete(column, activity),
        }
    }

    fn allocate_id(&mut self) -> BoardResult<ActivityId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if !self.board.contains(candidate) {
                return Ok(candidate);
            }
            debug!(activity = %candidate, "skipping identifier already on the board");
        }
        Err(BoardError::IdSpaceExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}
