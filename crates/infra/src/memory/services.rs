//! In-memory domain handlers
//!
//! Handler implementations over the in-memory stores. Validation has
//! already run by the time these execute, so they assume well-formed
//! input and report anything else as `InvalidInput`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use timemate_core::{AnalyticsService, CommandExtractor, ProjectService, TimeEntryService};
use timemate_domain::constants::{ACTION_STOP, ALL_PROJECTS};
use timemate_domain::{
    Project, ProjectFields, Result, TimeEntry, TimeEntryFields, TimeMateError, TimeSummary, User,
};
use tracing::info;

/// Creates and stops time entries against an [`super::repositories::InMemoryTimeEntries`] store.
pub struct InMemoryTimeEntryService {
    entries: Arc<super::repositories::InMemoryTimeEntries>,
}

impl InMemoryTimeEntryService {
    #[must_use]
    pub fn new(entries: Arc<super::repositories::InMemoryTimeEntries>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl TimeEntryService for InMemoryTimeEntryService {
    async fn create_entry(&self, user: &User, fields: &TimeEntryFields) -> Result<TimeEntry> {
        let now = Utc::now();

        if fields.action == ACTION_STOP {
            return self.entries.close_active(user.id, now).ok_or_else(|| {
                TimeMateError::InvalidInput("no active timer to stop".to_string())
            });
        }

        let description = fields
            .description_trimmed()
            .ok_or_else(|| TimeMateError::InvalidInput("entry needs a description".to_string()))?
            .to_string();
        let start_time = fields.start_or(now);
        // A duration turns the entry into a completed block; otherwise it
        // becomes the running timer.
        let end_time = fields
            .end_time
            .or_else(|| (fields.duration > 0).then(|| start_time + Duration::minutes(fields.duration)));
        let duration_minutes = end_time.map_or(0, |end| (end - start_time).num_minutes());

        let entry = TimeEntry {
            id: self.entries.next_id(),
            user_id: user.id,
            description,
            project_name: fields.project_name.clone(),
            tags: fields.tags.clone(),
            start_time,
            end_time,
            duration_minutes,
        };
        self.entries.push(entry.clone());
        info!(entry_id = entry.id, user_id = user.id, "time entry created");
        Ok(entry)
    }
}

/// Creates projects against an [`super::repositories::InMemoryProjects`] store.
pub struct InMemoryProjectService {
    projects: Arc<super::repositories::InMemoryProjects>,
}

impl InMemoryProjectService {
    #[must_use]
    pub fn new(projects: Arc<super::repositories::InMemoryProjects>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl ProjectService for InMemoryProjectService {
    async fn create_project(&self, user: &User, fields: &ProjectFields) -> Result<Project> {
        let name = fields
            .name_trimmed()
            .ok_or_else(|| TimeMateError::InvalidInput("project needs a name".to_string()))?;
        let project = self.projects.insert(user.id, name, None);
        info!(project_id = project.id, user_id = user.id, "project created");
        Ok(project)
    }
}

/// Sums logged minutes from the entry store, optionally narrowed to one
/// project mentioned in the command.
pub struct InMemoryAnalyticsService {
    entries: Arc<super::repositories::InMemoryTimeEntries>,
    extractor: Arc<dyn CommandExtractor>,
}

impl InMemoryAnalyticsService {
    #[must_use]
    pub fn new(
        entries: Arc<super::repositories::InMemoryTimeEntries>,
        extractor: Arc<dyn CommandExtractor>,
    ) -> Self {
        Self { entries, extractor }
    }
}

#[async_trait]
impl AnalyticsService for InMemoryAnalyticsService {
    async fn summarize(&self, user: &User, command: &str) -> Result<TimeSummary> {
        let project_name = self
            .extractor
            .extract_project_name(command)
            .await?
            .unwrap_or_else(|| ALL_PROJECTS.to_string());

        let total_minutes = self
            .entries
            .for_owner(user.id)
            .into_iter()
            .filter(|entry| {
                project_name == ALL_PROJECTS || entry.project_name.as_deref() == Some(&project_name)
            })
            .map(|entry| entry.duration_minutes)
            .sum();

        Ok(TimeSummary { period: "all time".to_string(), project_name, total_minutes })
    }
}
