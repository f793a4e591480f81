//! Domain type definitions
//!
//! Split by concern: assistant pipeline types, extraction field payloads,
//! and the tracked entities the pipeline validates against.

pub mod assistant;
pub mod entities;
pub mod fields;

pub use assistant::{
    AssistantReply, ConversationTurn, Intent, Persona, SuggestedAction, ValidationResult,
};
pub use entities::{Project, Tag, TimeEntry, TimeSummary, User};
pub use fields::{ProjectFields, TimeEntryFields};
