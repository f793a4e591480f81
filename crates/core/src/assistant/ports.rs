//! Port interfaces for the conversation pipeline
//!
//! Every external collaborator the pipeline touches is behind one of these
//! traits: the extraction backend, the read-only entity lookups used by
//! validation, the domain handlers invoked on dispatch, and the
//! conversation log.

use async_trait::async_trait;
use timemate_domain::{
    ConversationTurn, Intent, Persona, Project, ProjectFields, Result, Tag, TimeEntry,
    TimeEntryFields, TimeSummary, User,
};

/// Narrow interface over the free-text extraction capability.
///
/// Implementations may be LLM-backed or deterministic/rule-based; the
/// pipeline assumes nothing about the backend. Output may be partially
/// populated or malformed — callers apply the documented field defaults
/// rather than trusting it.
#[async_trait]
pub trait CommandExtractor: Send + Sync {
    /// Classify a command into one intent, given recent-conversation
    /// context (empty string allowed).
    async fn classify_intent(&self, command: &str, context: &str) -> Result<Intent>;

    /// Extract time-entry fields from a command.
    async fn extract_time_entry(&self, command: &str) -> Result<TimeEntryFields>;

    /// Extract project fields from a command.
    async fn extract_project(&self, command: &str) -> Result<ProjectFields>;

    /// Extract just a project name, if the command mentions one.
    async fn extract_project_name(&self, command: &str) -> Result<Option<String>>;

    /// Produce a conversational reply for commands with no structured
    /// handler, staying in the given persona.
    async fn chat(&self, command: &str, context: &str, persona: &Persona) -> Result<String>;
}

/// Read-only user lookup. A miss here is a session inconsistency and fatal
/// for the whole request.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Read-only project lookups used by validation and project listing.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_name_and_owner(&self, name: &str, owner_id: i64) -> Result<Option<Project>>;

    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Project>>;
}

/// Read-only tag lookup used by validation.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn find_by_name_and_owner(&self, name: &str, owner_id: i64) -> Result<Option<Tag>>;
}

/// Read-only time entry lookup used by validation.
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// The user's currently running timer (end time is null), if any.
    async fn find_active_for_owner(&self, owner_id: i64) -> Result<Option<TimeEntry>>;
}

/// Append-only per-user conversation history.
///
/// Appends must preserve insertion order per user so the last-N context
/// window stays meaningful.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    async fn append(&self, turn: &ConversationTurn) -> Result<()>;

    /// The most recent `n` turns for a user, in chronological order.
    /// Empty when no history exists.
    async fn recent_for_user(&self, user_id: &str, n: usize) -> Result<Vec<ConversationTurn>>;
}

/// Domain handler for time entry creation.
#[async_trait]
pub trait TimeEntryService: Send + Sync {
    async fn create_entry(&self, user: &User, fields: &TimeEntryFields) -> Result<TimeEntry>;
}

/// Domain handler for project creation.
#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn create_project(&self, user: &User, fields: &ProjectFields) -> Result<Project>;
}

/// Domain handler for time analytics aggregation.
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    async fn summarize(&self, user: &User, command: &str) -> Result<TimeSummary>;
}
