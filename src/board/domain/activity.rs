//! Activity value types and payload validation.

use super::{ActivityField, ActivityId, ParsePriorityError, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Activity urgency.
///
/// Parsing, including deserialization, ignores case and surrounding
/// whitespace; serialization always writes the lowercase name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the numeric rank used for sorting (`high` = 3, `low` = 1).
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work on the board.
///
/// The identifier never changes once assigned. `end_date` is allowed to
/// precede `start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    id: ActivityId,
    title: String,
    priority: Priority,
    assignee: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "blank_duration_as_none"
    )]
    duration: Option<String>,
}

impl Activity {
    /// Returns the activity identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the owner name.
    #[must_use]
    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Returns the scheduled start.
    #[must_use]
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Returns the scheduled end.
    #[must_use]
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Returns the free-text duration annotation, if any.
    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    /// Returns the required fields that are blank.
    pub(crate) fn blank_fields(&self) -> Vec<ActivityField> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push(ActivityField::Title);
        }
        if is_blank(&self.assignee) {
            missing.push(ActivityField::Assignee);
        }
        missing
    }
}

/// Caller-supplied activity fields for `add` and `edit` commands.
///
/// Dates are optional here so that a half-filled form can be represented;
/// [`ActivityDraft::validate`] rejects drafts with missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    /// Display title.
    pub title: String,
    /// Priority, `medium` when unspecified.
    #[serde(default)]
    pub priority: Priority,
    /// Owner name.
    pub assignee: String,
    /// Scheduled start.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Scheduled end.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Optional free-text duration.
    #[serde(default)]
    pub duration: Option<String>,
}

impl ActivityDraft {
    /// Creates a draft with title and assignee and no schedule.
    #[must_use]
    pub fn new(title: impl Into<String>, assignee: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            assignee: assignee.into(),
            ..Self::default()
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets both scheduled start and end.
    #[must_use]
    pub const fn with_schedule(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Sets the scheduled start only.
    #[must_use]
    pub const fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Sets the scheduled end only.
    #[must_use]
    pub const fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Sets the duration annotation.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Checks that every required field is present.
    ///
    /// A blank (whitespace-only) title or assignee counts as missing. An
    /// empty duration is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] listing every missing field.
    pub fn validate(self) -> Result<ValidatedActivity, ValidationErrors> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push(ActivityField::Title);
        }
        if is_blank(&self.assignee) {
            missing.push(ActivityField::Assignee);
        }
        if self.start_date.is_none() {
            missing.push(ActivityField::StartDate);
        }
        if self.end_date.is_none() {
            missing.push(ActivityField::EndDate);
        }

        let (Some(start_date), Some(end_date)) = (self.start_date, self.end_date) else {
            return Err(ValidationErrors::new(missing));
        };
        if !missing.is_empty() {
            return Err(ValidationErrors::new(missing));
        }

        Ok(ValidatedActivity {
            title: self.title,
            priority: self.priority,
            assignee: self.assignee,
            start_date,
            end_date,
            duration: self.duration.filter(|duration| !is_blank(duration)),
        })
    }
}

impl From<&Activity> for ActivityDraft {
    fn from(activity: &Activity) -> Self {
        Self {
            title: activity.title.clone(),
            priority: activity.priority,
            assignee: activity.assignee.clone(),
            start_date: Some(activity.start_date),
            end_date: Some(activity.end_date),
            duration: activity.duration.clone(),
        }
    }
}

/// Activity fields that passed validation and only lack an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedActivity {
    title: String,
    priority: Priority,
    assignee: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    duration: Option<String>,
}

impl ValidatedActivity {
    /// Binds the fields to an identifier.
    #[must_use]
    pub fn into_activity(self, id: ActivityId) -> Activity {
        Activity {
            id,
            title: self.title,
            priority: self.priority,
            assignee: self.assignee,
            start_date: self.start_date,
            end_date: self.end_date,
            duration: self.duration,
        }
    }
}

fn blank_duration_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let duration = Option::<String>::deserialize(deserializer)?;
    Ok(duration.filter(|text| !is_blank(text)))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
