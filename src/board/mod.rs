//! Board state engine.
//!
//! The board owns four fixed pipeline stages, each holding an ordered list of
//! activities. Mutations go through the [`services::BoardStore`], which keeps
//! one canonical snapshot and applies commands atomically. Display-side reads
//! go through [`query::QueryProjection`], which derives filtered and sorted
//! per-column views without touching the snapshot.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Command orchestration in [`services`]
//! - Read-only projections in [`query`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod query;
pub mod services;

#[cfg(test)]
mod tests;
