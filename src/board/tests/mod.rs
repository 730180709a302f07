//! Unit tests for the board module.
//!
//! Tests are organised by component: domain values, the board aggregate,
//! the store service, and query projections.

mod support;
