//! Text matching for the search filter.

use crate::board::domain::Activity;
use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Renders activity dates the way they are shown on cards, for matching.
///
/// Dates render as `"jan 12, 2026, 09:00 am"`: abbreviated month, day,
/// year, and 12-hour clock time, in a fixed display offset, lower-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchDateFormat {
    offset: FixedOffset,
}

impl SearchDateFormat {
    const PATTERN: &'static str = "%b %-d, %Y, %I:%M %p";

    /// Renders dates in `offset`.
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Renders dates in UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Returns the lower-cased rendering of `timestamp`.
    #[must_use]
    pub fn render(&self, timestamp: DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.offset)
            .format(Self::PATTERN)
            .to_string()
            .to_lowercase()
    }

    /// Returns `true` when any searchable field contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, activity: &Activity, needle: &str) -> bool {
        activity.title().to_lowercase().contains(needle)
            || activity.assignee().to_lowercase().contains(needle)
            || activity.priority().as_str().contains(needle)
            || self.render(activity.start_date()).contains(needle)
            || self.render(activity.end_date()).contains(needle)
    }
}

impl Default for SearchDateFormat {
    fn default() -> Self {
        Self::utc()
    }
}
