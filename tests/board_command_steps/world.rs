//! Shared world state for board command BDD scenarios.

use activity_board::board::{
    adapters::SequentialIdSource,
    domain::{ActivityId, Board, BoardError, ColumnId},
    services::BoardStore,
};
use chrono::{DateTime, TimeZone, Utc};
use rstest::fixture;

/// Scenario world for board command behaviour tests.
pub struct BoardWorld {
    pub store: BoardStore<SequentialIdSource>,
    pub before: Option<Board>,
    pub last_error: Option<BoardError>,
    pub view: Vec<(ColumnId, Vec<String>)>,
}

impl BoardWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: BoardStore::new(Board::new(), SequentialIdSource::default()),
            before: None,
            last_error: None,
            view: Vec::new(),
        }
    }

    /// Records the snapshot so later steps can check it was not changed.
    pub fn remember_snapshot(&mut self) {
        self.before = Some(self.store.snapshot().clone());
    }

    /// Looks up an activity identifier by title.
    pub fn id_of(&self, title: &str) -> eyre::Result<ActivityId> {
        self.store
            .snapshot()
            .activities()
            .find(|activity| activity.title() == title)
            .map(|activity| activity.id())
            .ok_or_else(|| eyre::eyre!("no activity titled {title}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Fixed start time used for scenario activities.
pub fn scheduled_at() -> eyre::Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2026, 1, 12, 9, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid scenario timestamp"))
}

/// Parses a column name used in a feature file.
pub fn column(name: &str) -> eyre::Result<ColumnId> {
    ColumnId::try_from(name).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}

/// Splits a comma-separated title list; an empty string means no titles.
pub fn title_list(titles: &str) -> Vec<String> {
    titles
        .split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_owned)
        .collect()
}
