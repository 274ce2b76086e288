//! Project record model.
//!
//! # Responsibility
//! - Define the canonical `Project` record as stored in the data file.
//! - Apply create-time defaults (`NewProject`) and shallow merges
//!   (`ProjectPatch`).
//!
//! # Invariants
//! - JSON field names are camelCase and match files written by earlier
//!   releases of the tracker.
//! - Timestamps carry millisecond precision so a record re-read from disk
//!   compares equal to the in-memory value.
//! - A patch can never rewrite `id`, `createdAt` or `updatedAt`.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque record identifier.
///
/// New records get UUID v4 text; ids loaded from older files are kept as-is.
pub type ProjectId = String;

pub const DEFAULT_STATUS: &str = "Todo";
pub const DEFAULT_PRIORITY: &str = "Medium";
pub const DEFAULT_PROGRESS: i64 = 0;

/// Persisted project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub progress: i64,
}

/// Input for creating a project.
///
/// Only `name` is required. Empty `status`, `priority` and date strings are
/// treated the same as omitted values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub progress: Option<i64>,
}

impl NewProject {
    /// Creates an input with only a name; every other field takes its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            status: None,
            priority: None,
            start_date: None,
            end_date: None,
            progress: None,
        }
    }
}

/// Partial update merged over an existing record.
///
/// Date fields are tri-state:
/// - `None`: leave untouched.
/// - `Some(None)`: clear (JSON `null` or `""`).
/// - `Some(Some(value))`: replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "nullable_date")]
    pub start_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable_date")]
    pub end_date: Option<Option<String>>,
    #[serde(default)]
    pub progress: Option<i64>,
}

impl ProjectPatch {
    /// Returns whether applying this patch would touch no field but `updatedAt`.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.progress.is_none()
    }
}

impl Project {
    /// Builds a new record from create input.
    ///
    /// # Invariants
    /// - `created_at == updated_at == now`.
    /// - Omitted or empty `status`/`priority` fall back to the defaults.
    pub fn from_new(input: NewProject, id: ProjectId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description.unwrap_or_default(),
            status: non_empty(input.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            priority: non_empty(input.priority).unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            created_at: now,
            updated_at: now,
            start_date: non_empty(input.start_date),
            end_date: non_empty(input.end_date),
            progress: input.progress.unwrap_or(DEFAULT_PROGRESS),
        }
    }

    /// Shallow-merges `patch` over this record and stamps `updated_at`.
    pub fn apply_patch(&mut self, patch: ProjectPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = non_empty(start_date);
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = non_empty(end_date);
        }
        if let Some(progress) = patch.progress {
            self.progress = progress;
        }
        self.updated_at = now;
    }
}

/// Current UTC time truncated to the precision stored on disk.
pub fn now_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Formats a timestamp the way it is written to the data file.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn default_priority() -> String {
    DEFAULT_PRIORITY.to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

fn nullable_date<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|value| Some(non_empty(value)))
}

mod iso_millis {
    use chrono::{DateTime, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc).trunc_subsecs(3))
            .map_err(|err| serde::de::Error::custom(format!("invalid timestamp `{raw}`: {err}")))
    }
}
