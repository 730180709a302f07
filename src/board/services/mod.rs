//! Application services for applying board commands.

mod command;
mod store;

pub use command::BoardCommand;
pub use store::BoardStore;
