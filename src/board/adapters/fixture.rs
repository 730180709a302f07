//! Demonstration board used as the mock initial snapshot.

use super::parse_timestamp;
use crate::board::{
    domain::{Activity, ActivityDraft, ActivityId, Board, Priority},
    ports::{SnapshotError, SnapshotResult, SnapshotSource},
};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use tracing::debug;

struct SeedActivity {
    id: u64,
    title: &'static str,
    priority: Priority,
    assignee: &'static str,
    start: &'static str,
    end: &'static str,
}

const fn seed(
    id: u64,
    title: &'static str,
    priority: Priority,
    assignee: &'static str,
    start: &'static str,
    end: &'static str,
) -> SeedActivity {
    SeedActivity {
        id,
        title,
        priority,
        assignee,
        start,
        end,
    }
}

const TODO: [SeedActivity; 5] = [
    seed(1, "Create wireframes", Priority::High, "Sarah", "2026-01-12T09:00", "2026-01-12T11:00"),
    seed(2, "Team standup meeting", Priority::Medium, "John", "2026-01-12T10:00", "2026-01-12T10:30"),
    seed(6, "Database schema design", Priority::High, "Mike", "2026-01-12T13:00", "2026-01-12T15:00"),
    seed(7, "API documentation", Priority::Low, "Lisa", "2026-01-13T09:00", "2026-01-13T10:00"),
    seed(8, "User onboarding flow", Priority::Medium, "Alex", "2026-01-12T16:00", "2026-01-12T17:00"),
];

const IN_PROGRESS: [SeedActivity; 4] = [
    seed(3, "Build dashboard UI", Priority::High, "Alex", "2026-01-12T11:00", "2026-01-12T15:00"),
    seed(9, "Backend API endpoints", Priority::High, "John", "2026-01-12T12:00", "2026-01-13T12:00"),
    seed(10, "Mobile responsiveness", Priority::Medium, "Sarah", "2026-01-12T14:00", "2026-01-12T18:00"),
    seed(11, "Unit tests for auth", Priority::Medium, "Mike", "2026-01-12T15:00", "2026-01-12T16:30"),
];

const REVIEW: [SeedActivity; 4] = [
    seed(4, "Code review PR #234", Priority::Medium, "Mike", "2026-01-12T14:00", "2026-01-12T14:30"),
    seed(12, "UI component library", Priority::High, "Lisa", "2026-01-11T16:00", "2026-01-12T09:00"),
    seed(13, "Database migrations", Priority::Low, "John", "2026-01-12T09:30", "2026-01-12T10:00"),
    seed(14, "Performance optimization", Priority::Medium, "Alex", "2026-01-12T13:30", "2026-01-12T14:30"),
];

const DONE: [SeedActivity; 8] = [
    seed(5, "Daily report", Priority::Low, "Sarah", "2026-01-12T08:00", "2026-01-12T08:15"),
    seed(15, "Environment setup", Priority::Low, "Mike", "2026-01-11T09:00", "2026-01-11T09:30"),
    seed(16, "Project kickoff meeting", Priority::Medium, "John", "2026-01-11T14:00", "2026-01-11T15:00"),
    seed(17, "Initial requirements doc", Priority::High, "Sarah", "2026-01-11T10:00", "2026-01-11T12:00"),
    seed(18, "Bug fix #123", Priority::High, "Alex", "2026-01-12T08:30", "2026-01-12T09:00"),
    seed(19, "Deployment pipeline", Priority::Medium, "Lisa", "2026-01-11T15:30", "2026-01-11T17:00"),
    seed(20, "Email templates", Priority::Low, "Mike", "2026-01-12T07:30", "2026-01-12T08:00"),
    seed(21, "README update", Priority::Low, "John", "2026-01-12T07:00", "2026-01-12T07:20"),
];

/// Seed board with 21 activities spread over the four columns.
///
/// Seed times carry no zone and are read in the configured offset.
#[derive(Debug, Clone, Copy)]
pub struct DemoFixture {
    offset: FixedOffset,
}

impl DemoFixture {
    /// Creates the fixture reading seed times in `offset`.
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    fn build_column(&self, seeds: &[SeedActivity]) -> SnapshotResult<Vec<Activity>> {
        seeds
            .iter()
            .map(|entry| {
                let start = self.timestamp(entry.id, entry.start)?;
                let end = self.timestamp(entry.id, entry.end)?;
                let fields = ActivityDraft::new(entry.title, entry.assignee)
                    .with_priority(entry.priority)
                    .with_schedule(start, end)
                    .validate()
                    .map_err(|err| SnapshotError::Board(err.into()))?;
                Ok(fields.into_activity(ActivityId::new(entry.id)))
            })
            .collect()
    }

    fn timestamp(&self, activity: u64, raw: &str) -> SnapshotResult<DateTime<Utc>> {
        parse_timestamp(raw, self.offset).ok_or_else(|| SnapshotError::InvalidTimestamp {
            activity,
            value: raw.to_owned(),
        })
    }
}

impl Default for DemoFixture {
    fn default() -> Self {
        Self::new(Utc.fix())
    }
}

impl SnapshotSource for DemoFixture {
    fn load(&self) -> SnapshotResult<Board> {
        let board = Board::from_columns(
            self.build_column(&TODO)?,
            self.build_column(&IN_PROGRESS)?,
            self.build_column(&REVIEW)?,
            self.build_column(&DONE)?,
        )?;
        debug!(activities = board.len(), "built demo board");
        Ok(board)
    }
}
