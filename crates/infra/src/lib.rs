//! # TimeMate Infrastructure
//!
//! Adapters behind the core's port traits:
//! - `llm`: extraction backends (OpenAI-compatible HTTP, rule-based)
//! - `memory`: in-memory repositories, conversation log, and domain
//!   handlers
//! - `config`: configuration loading (env-first, file fallback)
//! - `observability`: tracing initialization

pub mod config;
pub mod llm;
pub mod memory;
pub mod observability;

// Re-export commonly used items
pub use llm::openai::OpenAiExtractor;
pub use llm::rules::RuleBasedExtractor;
pub use memory::repositories::{
    InMemoryConversationLog, InMemoryProjects, InMemoryTags, InMemoryTimeEntries, InMemoryUsers,
};
pub use memory::services::{
    InMemoryAnalyticsService, InMemoryProjectService, InMemoryTimeEntryService,
};
