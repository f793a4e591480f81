//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Longest accepted time entry in minutes (24 hours for single-day entries).
pub const MAX_ENTRY_DURATION_MINUTES: i64 = 1440;

/// Number of recent conversation turns folded into the classification and
/// general-chat context window.
pub const CONTEXT_WINDOW_TURNS: usize = 5;

/// Sentinel project name that means "aggregate across every project" in
/// analytics commands. Never validated against the project repository.
pub const ALL_PROJECTS: &str = "All Projects";

// Persona handling
pub const TONE_INSPIRATIONAL: &str = "Inspirational";
pub const ARCHETYPE_GUIDE: &str = "Guide";

// Extraction action verbs
pub const ACTION_CREATE: &str = "create";
pub const ACTION_STOP: &str = "stop";
pub const ACTION_UPDATE: &str = "update";
pub const ACTION_DELETE: &str = "delete";
