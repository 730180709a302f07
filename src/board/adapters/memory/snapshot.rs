//! Snapshot supplier backed by an already-built board.

use crate::board::{
    domain::Board,
    ports::{SnapshotResult, SnapshotSource},
};

/// Supplies a copy of a board held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshot {
    board: Board,
}

impl InMemorySnapshot {
    /// Wraps a board.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self { board }
    }
}

impl SnapshotSource for InMemorySnapshot {
    fn load(&self) -> SnapshotResult<Board> {
        Ok(self.board.clone())
    }
}
