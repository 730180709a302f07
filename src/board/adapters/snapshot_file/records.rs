//! Snapshot file records, including the legacy `time` activity shape.

use crate::board::{
    adapters::parse_timestamp,
    domain::{Activity, ActivityDraft, ActivityId, Board, Priority},
    ports::{SnapshotError, SnapshotResult},
};
use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(super) struct SnapshotDocument {
    todo: Vec<ActivityRecord>,
    in_progress: Vec<ActivityRecord>,
    review: Vec<ActivityRecord>,
    done: Vec<ActivityRecord>,
}

impl SnapshotDocument {
    pub(super) fn into_board(self, offset: FixedOffset) -> SnapshotResult<Board> {
        Ok(Board::from_columns(
            convert_all(self.todo, offset)?,
            convert_all(self.in_progress, offset)?,
            convert_all(self.review, offset)?,
            convert_all(self.done, offset)?,
        )?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ActivityRecord {
    Current(CurrentRecord),
    Legacy(LegacyRecord),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentRecord {
    id: u64,
    title: String,
    #[serde(default)]
    priority: Priority,
    assignee: String,
    start_date: String,
    end_date: String,
    #[serde(default)]
    duration: Option<String>,
}

/// Older activity shape with a single point in time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyRecord {
    id: u64,
    title: String,
    #[serde(default)]
    priority: Priority,
    assignee: String,
    time: String,
    #[serde(default)]
    duration: Option<String>,
}

impl ActivityRecord {
    fn into_activity(self, offset: FixedOffset) -> SnapshotResult<Activity> {
        let (id, draft) = match self {
            Self::Current(record) => {
                let mut draft = ActivityDraft::new(record.title, record.assignee)
                    .with_priority(record.priority);
                draft.start_date = timestamp(record.id, &record.start_date, offset)?;
                draft.end_date = timestamp(record.id, &record.end_date, offset)?;
                draft.duration = record.duration;
                (record.id, draft)
            }
            Self::Legacy(record) => {
                let mut draft = ActivityDraft::new(record.title, record.assignee)
                    .with_priority(record.priority);
                let time = timestamp(record.id, &record.time, offset)?;
                draft.start_date = time;
                draft.end_date = time;
                draft.duration = record.duration;
                (record.id, draft)
            }
        };
        let fields = draft
            .validate()
            .map_err(|err| SnapshotError::Board(err.into()))?;
        Ok(fields.into_activity(ActivityId::new(id)))
    }
}

fn convert_all(records: Vec<ActivityRecord>, offset: FixedOffset) -> SnapshotResult<Vec<Activity>> {
    records
        .into_iter()
        .map(|record| record.into_activity(offset))
        .collect()
}

/// Blank text counts as a missing date and is left to draft validation.
fn timestamp(
    activity: u64,
    raw: &str,
    offset: FixedOffset,
) -> SnapshotResult<Option<DateTime<Utc>>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_timestamp(raw, offset)
        .map(Some)
        .ok_or_else(|| SnapshotError::InvalidTimestamp {
            activity,
            value: raw.to_owned(),
        })
}
