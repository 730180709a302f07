//! JSON snapshot file supplier.
//!
//! The file holds one key per column. Activities may use the current shape
//! (`startDate`/`endDate`) or the legacy shape with a single `time` field,
//! which is mapped onto both dates when the snapshot is read.

mod records;

use crate::board::{
    adapters::fs,
    domain::Board,
    ports::{SnapshotError, SnapshotResult, SnapshotSource},
};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::FixedOffset;
use records::SnapshotDocument;
use tracing::info;

/// Reads the initial board from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: Utf8PathBuf,
    offset: FixedOffset,
}

impl JsonSnapshotFile {
    /// Creates a supplier for `path`, reading zone-less timestamps in
    /// `offset`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, offset: FixedOffset) -> Self {
        Self {
            path: path.into(),
            offset,
        }
    }

    /// Returns the snapshot location.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

impl SnapshotSource for JsonSnapshotFile {
    fn load(&self) -> SnapshotResult<Board> {
        let contents = fs::read_to_string(&self.path).map_err(|source| SnapshotError::Io {
            path: self.path.clone(),
            source,
        })?;
        let document: SnapshotDocument =
            serde_json::from_str(&contents).map_err(|source| SnapshotError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let board = document.into_board(self.offset)?;
        info!(path = %self.path, activities = board.len(), "loaded board snapshot");
        Ok(board)
    }
}
