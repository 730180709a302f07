//! Shared builders for board unit tests.

use crate::board::domain::{Activity, ActivityDraft, ActivityId, Board, Priority};
use chrono::{DateTime, TimeZone, Utc};

/// Returns 2026-01-`day` `hour`:`minute` UTC.
pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, day, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds an activity starting at 09:00 on the given day.
pub fn activity(id: u64, title: &str, priority: Priority, assignee: &str) -> Activity {
    ActivityDraft::new(title, assignee)
        .with_priority(priority)
        .with_schedule(at(12, 9, 0), at(12, 10, 0))
        .validate()
        .expect("valid draft")
        .into_activity(ActivityId::new(id))
}

/// Builds an activity with an explicit start time.
pub fn activity_starting(id: u64, title: &str, start: DateTime<Utc>) -> Activity {
    ActivityDraft::new(title, "Sam")
        .with_schedule(start, start)
        .validate()
        .expect("valid draft")
        .into_activity(ActivityId::new(id))
}

/// Builds a board with activities 1..=n titled by letter in `todo`.
pub fn todo_board(titles: &[&str]) -> Board {
    let todo = titles
        .iter()
        .zip(1..)
        .map(|(title, id)| activity(id, title, Priority::Medium, "Sam"))
        .collect();
    Board::from_columns(todo, Vec::new(), Vec::new(), Vec::new()).expect("valid board")
}

/// Returns the raw identifiers of a column slice.
pub fn ids(activities: &[Activity]) -> Vec<u64> {
    activities.iter().map(|item| item.id().value()).collect()
}

/// Returns the titles of a column slice.
pub fn titles(activities: &[Activity]) -> Vec<&str> {
    activities.iter().map(Activity::title).collect()
}

/// Returns a complete draft scheduled on 2026-01-12.
pub fn draft(title: &str, assignee: &str) -> ActivityDraft {
    ActivityDraft::new(title, assignee).with_schedule(at(12, 9, 0), at(12, 11, 0))
}
