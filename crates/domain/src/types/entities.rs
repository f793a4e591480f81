//! Tracked entities
//!
//! Lightweight views of the entities the pipeline validates against and the
//! results domain handlers return. Persistence of these lives outside this
//! workspace; only the shapes needed for validation and formatting exist
//! here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated user, resolved once per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
}

/// A project owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub client: Option<String>,
    pub owner_id: i64,
}

/// A tag owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
}

/// A logged block of time. `end_time: None` denotes the active timer, a
/// per-user singleton.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: i64,
    pub description: String,
    pub project_name: Option<String>,
    pub tags: Vec<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub duration_minutes: i64,
}

impl TimeEntry {
    /// Whether this entry is a currently running timer.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Aggregated time for an analytics query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSummary {
    /// Human-readable period, e.g. "this week".
    pub period: String,
    pub project_name: String,
    pub total_minutes: i64,
}
