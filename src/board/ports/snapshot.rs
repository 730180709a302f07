//! Snapshot supplier port.

use crate::board::domain::{Board, BoardError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Result type for snapshot loading.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Supplies the complete initial board.
///
/// Implementations must return all four columns, possibly empty, with
/// board-wide unique identifiers.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotSource {
    /// Loads the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the snapshot cannot be read or does not
    /// describe a valid board.
    fn load(&self) -> SnapshotResult<Board>;
}

/// Errors returned by snapshot suppliers.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        /// Snapshot location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not valid snapshot JSON.
    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        /// Snapshot location.
        path: Utf8PathBuf,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// A timestamp could not be interpreted.
    #[error("invalid timestamp '{value}' on activity {activity}")]
    InvalidTimestamp {
        /// Raw activity identifier.
        activity: u64,
        /// Offending timestamp text.
        value: String,
    },

    /// The decoded snapshot violates a board invariant.
    #[error(transparent)]
    Board(#[from] BoardError),
}
