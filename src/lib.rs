//! Activity board: a task-tracking board state engine.
//!
//! A board holds four fixed pipeline columns (`todo`, `inProgress`,
//! `review`, `done`), each an ordered list of activities. This crate keeps
//! the board consistent across moves, reorders, and edits, and derives
//! filtered, sorted, searchable views for display.
//!
//! # Architecture
//!
//! The engine follows hexagonal architecture principles:
//!
//! - **Domain**: activities, columns, and the board aggregate
//! - **Ports**: snapshot suppliers and identity sources
//! - **Adapters**: JSON snapshot files, the demo fixture, counters, clocks
//! - **Services**: the board store that applies commands atomically
//! - **Query**: pure projections over snapshots
//!
//! # Modules
//!
//! - [`board`]: the board state engine
//! - [`config`]: settings for assembling a store

pub mod board;
pub mod config;
