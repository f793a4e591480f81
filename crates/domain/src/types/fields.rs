//! Extraction field payloads
//!
//! Typed per-intent structures for the fields the extraction backend pulls
//! out of free-text commands. The backend returns occasionally malformed or
//! partially populated JSON, so every field deserializes leniently and
//! defaults are the documented fallbacks, never an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::ACTION_CREATE;

/// Fields extracted for `CREATE_TIME_ENTRY` commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeEntryFields {
    pub description: Option<String>,
    pub project_name: Option<String>,
    #[serde(alias = "tagNames")]
    pub tags: Vec<String>,
    /// "create" for new entries, "stop" for stopping an active timer.
    pub action: String,
    /// Duration in minutes; 0 when unspecified.
    #[serde(deserialize_with = "lenient_i64")]
    pub duration: i64,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl Default for TimeEntryFields {
    fn default() -> Self {
        Self {
            description: None,
            project_name: None,
            tags: Vec::new(),
            action: ACTION_CREATE.to_string(),
            duration: 0,
            start_time: None,
            end_time: None,
        }
    }
}

impl TimeEntryFields {
    /// Start time with the documented fallback applied: "now" when the
    /// command did not specify one.
    #[must_use]
    pub fn start_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.start_time.unwrap_or(now)
    }

    /// Description trimmed; `None` when missing or blank.
    #[must_use]
    pub fn description_trimmed(&self) -> Option<&str> {
        self.description.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }
}

/// Fields extracted for `MANAGE_PROJECT` commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectFields {
    pub name: Option<String>,
    pub description: String,
    /// "create", "update" or "delete"; defaults to "create".
    pub action: String,
}

impl Default for ProjectFields {
    fn default() -> Self {
        Self { name: None, description: String::new(), action: ACTION_CREATE.to_string() }
    }
}

impl ProjectFields {
    /// Project name trimmed; `None` when missing or blank.
    #[must_use]
    pub fn name_trimmed(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// Accept a duration as a JSON number, a numeric string, or null.
/// Anything unparseable collapses to 0, matching the extraction fallback.
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Float(f64),
        Text(String),
        Null(Option<()>),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n,
        #[allow(clippy::cast_possible_truncation)]
        Raw::Float(f) => f as i64,
        Raw::Text(s) => s.trim().parse().unwrap_or(0),
        Raw::Null(_) => 0,
    })
}
