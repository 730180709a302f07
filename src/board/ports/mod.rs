//! Port contracts for the board engine.
//!
//! Ports describe the two collaborators the engine needs from outside: a
//! supplier of the initial snapshot and a source of fresh identifiers.

pub mod id_source;
pub mod snapshot;

pub use id_source::ActivityIdSource;
pub use snapshot::{SnapshotError, SnapshotResult, SnapshotSource};
