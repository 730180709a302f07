//! Adapter implementations for board ports.

pub mod fixture;
pub(crate) mod fs;
pub mod memory;
pub mod snapshot_file;
mod timestamp;

pub use fixture::DemoFixture;
pub use memory::{ClockIdSource, InMemorySnapshot, SequentialIdSource};
pub use snapshot_file::JsonSnapshotFile;
pub use timestamp::parse_timestamp;
