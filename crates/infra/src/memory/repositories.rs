//! In-memory repositories and conversation log

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use timemate_core::{
    ConversationStore, ProjectRepository, TagRepository, TimeEntryRepository, UserRepository,
};
use timemate_domain::{ConversationTurn, Project, Result, Tag, TimeEntry, User};

/// In-memory user registry.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: RwLock<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUsers {
    #[must_use]
    pub fn new() -> Self {
        Self { users: RwLock::new(Vec::new()), next_id: AtomicI64::new(1) }
    }

    /// Register a user and return it with its assigned id.
    pub fn insert(&self, email: &str, name: Option<&str>) -> User {
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            email: email.to_string(),
            name: name.map(str::to_string),
        };
        self.users.write().push(user.clone());
        user
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users.read().iter().find(|u| u.email == email).cloned())
    }
}

/// In-memory project store.
#[derive(Debug, Default)]
pub struct InMemoryProjects {
    projects: RwLock<Vec<Project>>,
    next_id: AtomicI64,
}

impl InMemoryProjects {
    #[must_use]
    pub fn new() -> Self {
        Self { projects: RwLock::new(Vec::new()), next_id: AtomicI64::new(1) }
    }

    pub fn insert(&self, owner_id: i64, name: &str, client: Option<&str>) -> Project {
        let project = Project {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: name.to_string(),
            client: client.map(str::to_string),
            owner_id,
        };
        self.projects.write().push(project.clone());
        project
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjects {
    async fn find_by_name_and_owner(&self, name: &str, owner_id: i64) -> Result<Option<Project>> {
        Ok(self
            .projects
            .read()
            .iter()
            .find(|p| p.owner_id == owner_id && p.name == name)
            .cloned())
    }

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Project>> {
        Ok(self.projects.read().iter().filter(|p| p.owner_id == owner_id).cloned().collect())
    }
}

/// In-memory tag store.
#[derive(Debug, Default)]
pub struct InMemoryTags {
    tags: RwLock<Vec<Tag>>,
    next_id: AtomicI64,
}

impl InMemoryTags {
    #[must_use]
    pub fn new() -> Self {
        Self { tags: RwLock::new(Vec::new()), next_id: AtomicI64::new(1) }
    }

    pub fn insert(&self, owner_id: i64, name: &str) -> Tag {
        let tag = Tag {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            name: name.to_string(),
            owner_id,
        };
        self.tags.write().push(tag.clone());
        tag
    }
}

#[async_trait]
impl TagRepository for InMemoryTags {
    async fn find_by_name_and_owner(&self, name: &str, owner_id: i64) -> Result<Option<Tag>> {
        Ok(self.tags.read().iter().find(|t| t.owner_id == owner_id && t.name == name).cloned())
    }
}

/// In-memory time entry store.
///
/// Also exposes the mutations the domain handlers need; the core only
/// sees the read-only `TimeEntryRepository` slice of it.
#[derive(Debug, Default)]
pub struct InMemoryTimeEntries {
    entries: RwLock<Vec<TimeEntry>>,
    next_id: AtomicI64,
}

impl InMemoryTimeEntries {
    #[must_use]
    pub fn new() -> Self {
        Self { entries: RwLock::new(Vec::new()), next_id: AtomicI64::new(1) }
    }

    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn push(&self, entry: TimeEntry) {
        self.entries.write().push(entry);
    }

    /// Close the user's active timer in place, returning the updated
    /// entry. `None` when no timer is running.
    pub fn close_active(
        &self,
        owner_id: i64,
        end_time: chrono::DateTime<chrono::Utc>,
    ) -> Option<TimeEntry> {
        let mut entries = self.entries.write();
        let entry =
            entries.iter_mut().find(|e| e.user_id == owner_id && e.end_time.is_none())?;
        entry.end_time = Some(end_time);
        entry.duration_minutes = (end_time - entry.start_time).num_minutes().max(0);
        Some(entry.clone())
    }

    pub fn for_owner(&self, owner_id: i64) -> Vec<TimeEntry> {
        self.entries.read().iter().filter(|e| e.user_id == owner_id).cloned().collect()
    }
}

#[async_trait]
impl TimeEntryRepository for InMemoryTimeEntries {
    async fn find_active_for_owner(&self, owner_id: i64) -> Result<Option<TimeEntry>> {
        Ok(self
            .entries
            .read()
            .iter()
            .find(|e| e.user_id == owner_id && e.end_time.is_none())
            .cloned())
    }
}

/// In-memory conversation log, append-only and ordered per user.
#[derive(Debug, Default)]
pub struct InMemoryConversationLog {
    turns: RwLock<Vec<ConversationTurn>>,
}

impl InMemoryConversationLog {
    #[must_use]
    pub fn new() -> Self {
        Self { turns: RwLock::new(Vec::new()) }
    }

    pub fn len(&self) -> usize {
        self.turns.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.read().is_empty()
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationLog {
    async fn append(&self, turn: &ConversationTurn) -> Result<()> {
        self.turns.write().push(turn.clone());
        Ok(())
    }

    async fn recent_for_user(&self, user_id: &str, n: usize) -> Result<Vec<ConversationTurn>> {
        let turns = self.turns.read();
        let for_user: Vec<ConversationTurn> =
            turns.iter().filter(|t| t.user_id == user_id).cloned().collect();
        let skip = for_user.len().saturating_sub(n);
        Ok(for_user.into_iter().skip(skip).collect())
    }
}
