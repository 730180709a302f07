//! In-memory adapters for identity and snapshot ports.

mod id_source;
mod snapshot;

pub use id_source::{ClockIdSource, SequentialIdSource};
pub use snapshot::InMemorySnapshot;
