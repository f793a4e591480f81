//! # TimeMate Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The conversational command pipeline (classify → validate → dispatch →
//!   format → persist)
//! - Port/adapter interfaces (traits) for every external collaborator
//! - No HTTP, database, or extraction-backend code
//!
//! ## Architecture Principles
//! - Only depends on `timemate-domain`
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod assistant;

// Re-export specific items to avoid ambiguity
pub use assistant::classifier::IntentClassifier;
pub use assistant::dispatcher::{DispatchOutcome, DomainDispatcher};
pub use assistant::fields::FieldExtractor;
pub use assistant::formatter::{ResponseFormatter, ResponseKind};
pub use assistant::orchestrator::ConversationOrchestrator;
pub use assistant::ports::{
    AnalyticsService, CommandExtractor, ConversationStore, ProjectRepository, ProjectService,
    TagRepository, TimeEntryRepository, TimeEntryService, UserRepository,
};
pub use assistant::validator::CommandValidator;
