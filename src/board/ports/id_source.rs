//! Identity source port for newly added activities.

use crate::board::domain::ActivityId;

/// Produces candidate identifiers for new activities.
///
/// Sources are not required to know the board contents. The board store
/// skips candidates that are already in use, so a source only has to avoid
/// returning the same value forever.
#[cfg_attr(test, mockall::automock)]
pub trait ActivityIdSource {
    /// Returns the next candidate identifier.
    fn next_id(&mut self) -> ActivityId;
}

impl<S: ActivityIdSource + ?Sized> ActivityIdSource for Box<S> {
    fn next_id(&mut self) -> ActivityId {
        (**self).next_id()
    }
}
