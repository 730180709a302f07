//! Read-only projections over board snapshots.
//!
//! Projections borrow the snapshot immutably and return views of
//! references into it, so they can never reorder or modify the underlying
//! columns.

mod directory;
mod options;
mod projection;
mod search;
mod view;

pub use directory::{assignees, member_view};
pub use options::{ActivityQuery, ParseQueryOptionError, SortDirection, SortKey};
pub use projection::QueryProjection;
pub use search::SearchDateFormat;
pub use view::{BoardView, ColumnView};
