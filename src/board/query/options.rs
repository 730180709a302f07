//! Query configuration: search text, assignee filter, and sort order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sort key applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Keep column order.
    #[default]
    None,
    /// Order by start date.
    Date,
    /// Order by priority rank.
    Priority,
}

impl SortKey {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Date => "date",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for SortKey {
    type Err = ParseQueryOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "date" => Ok(Self::Date),
            "priority" => Ok(Self::Priority),
            _ => Err(ParseQueryOptionError::SortKey(s.to_owned())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction, only meaningful when the key is not [`SortKey::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Earliest date or lowest priority first.
    #[default]
    Asc,
    /// Latest date or highest priority first.
    Desc,
}

impl SortDirection {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseQueryOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseQueryOptionError::SortDirection(s.to_owned())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned while parsing query options.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseQueryOptionError {
    /// Unknown sort key.
    #[error("unknown sort key: {0}")]
    SortKey(String),
    /// Unknown sort direction.
    #[error("unknown sort direction: {0}")]
    SortDirection(String),
}

/// Filter and sort settings for a projection.
///
/// Empty search text and an empty or absent assignee disable the
/// respective filter.
///
/// # Examples
///
/// ```
/// use activity_board::board::query::{ActivityQuery, SortDirection, SortKey};
///
/// let mut query = ActivityQuery::default()
///     .with_search("review")
///     .sorted_by(SortKey::Priority, SortDirection::Desc);
/// assert!(query.is_active());
///
/// query.clear();
/// assert!(!query.is_active());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityQuery {
    /// Case-insensitive text matched against several activity fields.
    pub search_text: String,
    /// Exact assignee to keep.
    pub assignee: Option<String>,
    /// Sort key.
    pub sort_key: SortKey,
    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl ActivityQuery {
    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Restricts the result to one assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the sort key and direction.
    #[must_use]
    pub const fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
    }

    /// Returns the assignee filter when it is set and non-empty.
    #[must_use]
    pub fn assignee_filter(&self) -> Option<&str> {
        self.assignee.as_deref().filter(|name| !name.is_empty())
    }

    /// Returns the lower-cased search needle when search is enabled.
    #[must_use]
    pub fn search_needle(&self) -> Option<String> {
        (!self.search_text.is_empty()).then(|| self.search_text.to_lowercase())
    }

    /// Returns `true` when any filter or sort is in effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty()
            || self.assignee_filter().is_some()
            || self.sort_key != SortKey::None
    }

    /// Resets every option: no search, no assignee, column order.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
