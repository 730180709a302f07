//! Step definitions for board command scenarios.

mod given;
mod then;
mod when;
pub mod world;
