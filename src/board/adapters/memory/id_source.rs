//! Counter and clock based identity sources.

use crate::board::{
    domain::{ActivityId, Board},
    ports::ActivityIdSource,
};
use mockable::Clock;

/// Monotonically increasing counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIdSource {
    next: u64,
}

impl SequentialIdSource {
    /// Starts counting at `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Starts counting one above the highest identifier on `board`.
    #[must_use]
    pub fn after(board: &Board) -> Self {
        let first = board
            .max_id()
            .map_or(1, |id| id.value().saturating_add(1));
        Self::starting_at(first)
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl ActivityIdSource for SequentialIdSource {
    fn next_id(&mut self) -> ActivityId {
        let id = ActivityId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Millisecond clock readings, bumped so that every identifier is strictly
/// greater than the previous one.
#[derive(Debug, Clone)]
pub struct ClockIdSource<C: Clock> {
    clock: C,
    last: Option<u64>,
}

impl<C: Clock> ClockIdSource<C> {
    /// Creates a source reading from `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock, last: None }
    }
}

impl<C: Clock> ActivityIdSource for ClockIdSource<C> {
    fn next_id(&mut self) -> ActivityId {
        let millis = u64::try_from(self.clock.utc().timestamp_millis()).unwrap_or_default();
        let candidate = self
            .last
            .map_or(millis, |last| millis.max(last.saturating_add(1)));
        self.last = Some(candidate);
        ActivityId::new(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClockIdSource, SequentialIdSource};
    use crate::board::{
        domain::{ActivityDraft, ActivityId, Board, ColumnId},
        ports::ActivityIdSource,
    };
    use chrono::{TimeZone, Utc};
    use mockable::DefaultClock;
    use rstest::rstest;

    #[rstest]
    fn sequential_source_counts_up() {
        let mut source = SequentialIdSource::starting_at(7);
        assert_eq!(source.next_id(), ActivityId::new(7));
        assert_eq!(source.next_id(), ActivityId::new(8));
    }

    #[rstest]
    fn sequential_source_starts_above_board_maximum() {
        let start = Utc
            .with_ymd_and_hms(2026, 1, 12, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        let mut board = Board::new();
        for raw in [3, 41, 12] {
            let activity = ActivityDraft::new(format!("Task {raw}"), "Sam")
                .with_schedule(start, start)
                .validate()
                .expect("valid draft")
                .into_activity(ActivityId::new(raw));
            board
                .append(ColumnId::Todo, activity)
                .expect("unique identifier");
        }

        let mut source = SequentialIdSource::after(&board);
        assert_eq!(source.next_id(), ActivityId::new(42));
    }

    #[rstest]
    fn sequential_source_on_empty_board_starts_at_one() {
        let mut source = SequentialIdSource::after(&Board::new());
        assert_eq!(source.next_id(), ActivityId::new(1));
    }

    #[rstest]
    fn clock_source_is_strictly_increasing() {
        let mut source = ClockIdSource::new(DefaultClock);
        let first = source.next_id();
        let second = source.next_id();
        let third = source.next_id();

        assert!(first < second);
        assert!(second < third);
    }
}
