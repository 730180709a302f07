//! Runtime settings for assembling a board store.
//!
//! Settings come from TOML text with `ACTIVITY_BOARD__*` environment
//! overrides applied on top:
//!
//! ```toml
//! id_strategy = "sequential"        # or "clock"
//! display_offset_minutes = 60
//! snapshot_path = "data/board.json"
//! demo_fixture = false
//! ```

use crate::board::{
    adapters::{
        ClockIdSource, DemoFixture, InMemorySnapshot, JsonSnapshotFile, SequentialIdSource, fs,
    },
    domain::{ActivityId, Board},
    ports::{ActivityIdSource, SnapshotError, SnapshotResult, SnapshotSource},
    query::QueryProjection,
    services::BoardStore,
};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::FixedOffset;
use mockable::DefaultClock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "ACTIVITY_BOARD__";

/// Errors raised while loading settings or assembling a store from them.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings {path}: {source}")]
    Io {
        /// Settings location.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The settings text is not valid TOML for [`BoardSettings`].
    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),

    /// An override carries a value that cannot be parsed.
    #[error("invalid value '{value}' for {key}")]
    InvalidValue {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },

    /// The display offset is not a valid UTC offset.
    #[error("display offset of {0} minutes is outside the valid range")]
    InvalidOffset(i32),

    /// The configured snapshot could not be loaded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// How identifiers are produced for new activities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Counter seeded above the highest identifier on the initial board.
    #[default]
    Sequential,
    /// Millisecond clock readings, strictly increasing.
    Clock,
}

impl IdStrategy {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Clock => "clock",
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "clock" => Ok(Self::Clock),
            _ => Err(s.to_owned()),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardSettings {
    /// Identifier strategy for `add`.
    pub id_strategy: IdStrategy,
    /// Offset from UTC, in minutes, for rendering dates and reading
    /// zone-less timestamps.
    pub display_offset_minutes: i32,
    /// JSON snapshot to start from.
    pub snapshot_path: Option<Utf8PathBuf>,
    /// Start from the demonstration board when no snapshot path is set.
    pub demo_fixture: bool,
}

impl BoardSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed text or unknown keys, and
    /// [`ConfigError::InvalidOffset`] for an out-of-range offset.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(raw)?;
        settings.display_offset()?;
        Ok(settings)
    }

    /// Reads settings from a TOML file and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or any value is
    /// invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)?.with_env_overrides()
    }

    /// Applies overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unparsable values.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by variable name.
    ///
    /// Recognised names are `ACTIVITY_BOARD__ID_STRATEGY`,
    /// `ACTIVITY_BOARD__DISPLAY_OFFSET_MINUTES`,
    /// `ACTIVITY_BOARD__SNAPSHOT_PATH`, and `ACTIVITY_BOARD__DEMO_FIXTURE`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for unparsable values and
    /// [`ConfigError::InvalidOffset`] for an out-of-range offset.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup_var(&lookup, "ID_STRATEGY") {
            self.id_strategy = parse_var("ID_STRATEGY", &value)?;
        }
        if let Some(value) = lookup_var(&lookup, "DISPLAY_OFFSET_MINUTES") {
            self.display_offset_minutes = parse_var("DISPLAY_OFFSET_MINUTES", &value)?;
        }
        if let Some(value) = lookup_var(&lookup, "SNAPSHOT_PATH") {
            self.snapshot_path = (!value.trim().is_empty()).then(|| Utf8PathBuf::from(value));
        }
        if let Some(value) = lookup_var(&lookup, "DEMO_FIXTURE") {
            self.demo_fixture = parse_flag("DEMO_FIXTURE", &value)?;
        }
        self.display_offset()?;
        Ok(self)
    }

    /// Returns the display offset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] when the offset is a day or
    /// more away from UTC.
    pub fn display_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.display_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidOffset(self.display_offset_minutes))
    }

    /// Returns the snapshot supplier selected by these settings.
    ///
    /// A snapshot path wins over the demo fixture; with neither, the board
    /// starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] for an out-of-range offset.
    pub fn snapshot_source(&self) -> Result<ConfiguredSnapshot, ConfigError> {
        let offset = self.display_offset()?;
        Ok(match (&self.snapshot_path, self.demo_fixture) {
            (Some(path), _) => ConfiguredSnapshot::File(JsonSnapshotFile::new(path.clone(), offset)),
            (None, true) => ConfiguredSnapshot::Demo(DemoFixture::new(offset)),
            (None, false) => ConfiguredSnapshot::Empty(InMemorySnapshot::default()),
        })
    }

    /// Returns the identity source for a store starting from `board`.
    #[must_use]
    pub fn id_source(&self, board: &Board) -> ConfiguredIdSource {
        match self.id_strategy {
            IdStrategy::Sequential => ConfiguredIdSource::Sequential(SequentialIdSource::after(board)),
            IdStrategy::Clock => ConfiguredIdSource::Clock(ClockIdSource::new(DefaultClock)),
        }
    }

    /// Returns a projection rendering dates in the display offset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] for an out-of-range offset.
    pub fn projection(&self) -> Result<QueryProjection, ConfigError> {
        Ok(QueryProjection::new(self.display_offset()?))
    }

    /// Loads the configured snapshot and wraps it in a store.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the offset is invalid or the snapshot
    /// cannot be loaded.
    pub fn open_store(&self) -> Result<BoardStore<ConfiguredIdSource>, ConfigError> {
        let source = self.snapshot_source()?;
        let board = source.load()?;
        let ids = self.id_source(&board);
        info!(
            id_strategy = %self.id_strategy,
            activities = board.len(),
            "opened board store"
        );
        Ok(BoardStore::new(board, ids))
    }
}

/// Snapshot supplier chosen by [`BoardSettings::snapshot_source`].
#[derive(Debug, Clone)]
pub enum ConfiguredSnapshot {
    /// JSON snapshot file.
    File(JsonSnapshotFile),
    /// Demonstration board.
    Demo(DemoFixture),
    /// Empty board.
    Empty(InMemorySnapshot),
}

impl SnapshotSource for ConfiguredSnapshot {
    fn load(&self) -> SnapshotResult<Board> {
        match self {
            Self::File(source) => source.load(),
            Self::Demo(source) => source.load(),
            Self::Empty(source) => source.load(),
        }
    }
}

/// Identity source chosen by [`BoardSettings::id_source`].
pub enum ConfiguredIdSource {
    /// Counter.
    Sequential(SequentialIdSource),
    /// Clock readings.
    Clock(ClockIdSource<DefaultClock>),
}

impl ActivityIdSource for ConfiguredIdSource {
    fn next_id(&mut self) -> ActivityId {
        match self {
            Self::Sequential(source) => source.next_id(),
            Self::Clock(source) => source.next_id(),
        }
    }
}

fn lookup_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(&format!("{ENV_PREFIX}{name}"))
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| invalid_value(name, value))
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(invalid_value(name, value)),
    }
}

fn invalid_value(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: format!("{ENV_PREFIX}{name}"),
        value: value.to_owned(),
    }
}
