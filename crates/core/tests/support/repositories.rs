//! In-memory mock implementations of the pipeline ports

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use timemate_core::{
    AnalyticsService, ConversationStore, ProjectRepository, ProjectService, TagRepository,
    TimeEntryRepository, TimeEntryService, UserRepository,
};
use timemate_domain::{
    ConversationTurn, Project, ProjectFields, Result, Tag, TimeEntry, TimeEntryFields,
    TimeMateError, TimeSummary, User,
};

/// In-memory mock for `UserRepository`, seeded with a fixed set of users.
#[derive(Default, Clone)]
pub struct MockUsers {
    users: Vec<User>,
}

impl MockUsers {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserRepository for MockUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }
}

/// In-memory mock for `ProjectRepository`.
#[derive(Default, Clone)]
pub struct MockProjects {
    projects: Vec<Project>,
}

impl MockProjects {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }
}

#[async_trait]
impl ProjectRepository for MockProjects {
    async fn find_by_name_and_owner(&self, name: &str, owner_id: i64) -> Result<Option<Project>> {
        Ok(self.projects.iter().find(|p| p.name == name && p.owner_id == owner_id).cloned())
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Project>> {
        Ok(self.projects.iter().filter(|p| p.owner_id == owner_id).cloned().collect())
    }
}

/// In-memory mock for `TagRepository`.
#[derive(Default, Clone)]
pub struct MockTags {
    tags: Vec<Tag>,
}

impl MockTags {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }
}

#[async_trait]
impl TagRepository for MockTags {
    async fn find_by_name_and_owner(&self, name: &str, owner_id: i64) -> Result<Option<Tag>> {
        Ok(self.tags.iter().find(|t| t.name == name && t.owner_id == owner_id).cloned())
    }
}

/// In-memory mock for `TimeEntryRepository`, holding at most one active
/// timer.
#[derive(Default, Clone)]
pub struct MockTimeEntries {
    active: Option<TimeEntry>,
}

impl MockTimeEntries {
    pub fn with_active(timer: TimeEntry) -> Self {
        Self { active: Some(timer) }
    }
}

#[async_trait]
impl TimeEntryRepository for MockTimeEntries {
    async fn find_active_for_owner(&self, owner_id: i64) -> Result<Option<TimeEntry>> {
        Ok(self.active.clone().filter(|t| t.user_id == owner_id))
    }
}

/// In-memory mock for `ConversationStore`. Appends preserve insertion
/// order per user; `turns()` exposes everything appended for assertions.
#[derive(Default, Clone)]
pub struct MockConversationLog {
    turns: Arc<Mutex<Vec<ConversationTurn>>>,
}

impl MockConversationLog {
    pub fn turns(&self) -> Vec<ConversationTurn> {
        self.turns.lock().clone()
    }
}

#[async_trait]
impl ConversationStore for MockConversationLog {
    async fn append(&self, turn: &ConversationTurn) -> Result<()> {
        self.turns.lock().push(turn.clone());
        Ok(())
    }

    async fn recent_for_user(&self, user_id: &str, n: usize) -> Result<Vec<ConversationTurn>> {
        let turns = self.turns.lock();
        let for_user: Vec<ConversationTurn> =
            turns.iter().filter(|t| t.user_id == user_id).cloned().collect();
        let skip = for_user.len().saturating_sub(n);
        Ok(for_user.into_iter().skip(skip).collect())
    }
}

/// In-memory mock for `TimeEntryService`; can be flipped to fail to
/// exercise the dispatch failure path.
#[derive(Default, Clone)]
pub struct MockTimeEntryService {
    fail: bool,
}

impl MockTimeEntryService {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl TimeEntryService for MockTimeEntryService {
    async fn create_entry(&self, user: &User, fields: &TimeEntryFields) -> Result<TimeEntry> {
        if self.fail {
            return Err(TimeMateError::Storage("write failed".into()));
        }
        let start = fields.start_or(Utc::now());
        Ok(TimeEntry {
            id: 1,
            user_id: user.id,
            description: fields.description.clone().unwrap_or_default(),
            project_name: fields.project_name.clone(),
            tags: fields.tags.clone(),
            start_time: start,
            end_time: None,
            duration_minutes: fields.duration,
        })
    }
}

/// In-memory mock for `ProjectService`.
#[derive(Default, Clone)]
pub struct MockProjectService;

#[async_trait]
impl ProjectService for MockProjectService {
    async fn create_project(&self, user: &User, fields: &ProjectFields) -> Result<Project> {
        Ok(Project {
            id: 99,
            name: fields.name.clone().unwrap_or_default(),
            client: None,
            owner_id: user.id,
        })
    }
}

/// In-memory mock for `AnalyticsService`, returning a fixed summary.
#[derive(Clone)]
pub struct MockAnalyticsService {
    summary: TimeSummary,
}

impl Default for MockAnalyticsService {
    fn default() -> Self {
        Self {
            summary: TimeSummary {
                period: "this week".to_string(),
                project_name: "All Projects".to_string(),
                total_minutes: 420,
            },
        }
    }
}

#[async_trait]
impl AnalyticsService for MockAnalyticsService {
    async fn summarize(&self, _user: &User, _command: &str) -> Result<TimeSummary> {
        Ok(self.summary.clone())
    }
}
