//! Domain model for the activity board.
//!
//! The domain covers activities, the closed set of pipeline columns, and the
//! board aggregate that enforces board-wide identifier uniqueness. No
//! infrastructure concerns cross this boundary.

mod activity;
mod board;
mod column;
mod error;
mod ids;

pub use activity::{Activity, ActivityDraft, Priority, ValidatedActivity};
pub use board::Board;
pub use column::ColumnId;
pub use error::{
    ActivityField, BoardError, BoardResult, ParseColumnIdError, ParsePriorityError,
    ValidationErrors,
};
pub use ids::ActivityId;
