//! Shared test fixtures for pipeline integration tests
//!
//! Provides a scripted extraction backend and in-memory mocks for every
//! port, enabling deterministic tests without a database or LLM.

// Each integration test binary compiles this module and uses a subset.
#![allow(dead_code)]

pub mod extractor;
pub mod repositories;

use chrono::{TimeZone, Utc};
use timemate_domain::{Project, Tag, TimeEntry, User};

pub use extractor::ScriptedExtractor;
pub use repositories::{
    MockAnalyticsService, MockConversationLog, MockProjectService, MockProjects, MockTags,
    MockTimeEntries, MockTimeEntryService, MockUsers,
};

pub const USER_EMAIL: &str = "dev@example.com";

pub fn test_user() -> User {
    User { id: 7, email: USER_EMAIL.to_string(), name: Some("Dev".to_string()) }
}

pub fn project(name: &str) -> Project {
    Project { id: 1, name: name.to_string(), client: Some("Acme".to_string()), owner_id: 7 }
}

pub fn tag(name: &str) -> Tag {
    Tag { id: 1, name: name.to_string(), owner_id: 7 }
}

/// A running timer (no end time) with a fixed id and description.
pub fn active_timer(id: i64, description: &str) -> TimeEntry {
    TimeEntry {
        id,
        user_id: 7,
        description: description.to_string(),
        project_name: None,
        tags: vec![],
        start_time: Utc.with_ymd_and_hms(2025, 5, 3, 10, 0, 0).single().unwrap(),
        end_time: None,
        duration_minutes: 0,
    }
}
