//! # TimeMate Domain
//!
//! Business domain types and models for TimeMate.
//!
//! This crate contains:
//! - Assistant data types (Intent, SuggestedAction, ConversationTurn, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other TimeMate crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::{Config, ConversationConfig, LlmConfig};
pub use errors::{error_label, Result, TimeMateError};
pub use types::assistant::{
    AssistantReply, ConversationTurn, Intent, Persona, SuggestedAction, ValidationResult,
};
pub use types::entities::{Project, Tag, TimeEntry, TimeSummary, User};
pub use types::fields::{ProjectFields, TimeEntryFields};
