//! Per-intent field extraction with local recovery
//!
//! The extraction backend occasionally returns malformed output. That is an
//! expected reliability characteristic, not an error: every extraction here
//! recovers by substituting the documented field defaults and logging, and
//! never propagates the failure.

use std::sync::Arc;

use timemate_domain::{ProjectFields, TimeEntryFields};
use tracing::warn;

use super::ports::CommandExtractor;

/// Converts command text into intent-specific structured fields, defaulting
/// anything the backend could not produce.
#[derive(Clone)]
pub struct FieldExtractor {
    extractor: Arc<dyn CommandExtractor>,
}

impl FieldExtractor {
    /// Create a new field extractor over the given extraction backend.
    pub fn new(extractor: Arc<dyn CommandExtractor>) -> Self {
        Self { extractor }
    }

    /// Time-entry fields for a command; defaults on extraction failure
    /// (empty tags, duration 0, action "create", no explicit times).
    pub async fn time_entry(&self, command: &str) -> TimeEntryFields {
        match self.extractor.extract_time_entry(command).await {
            Ok(fields) => fields,
            Err(err) => {
                warn!(error = %err, "time entry extraction failed, using defaults");
                TimeEntryFields::default()
            }
        }
    }

    /// Project fields for a command; defaults on extraction failure
    /// (no name, empty description, action "create").
    pub async fn project(&self, command: &str) -> ProjectFields {
        match self.extractor.extract_project(command).await {
            Ok(fields) => fields,
            Err(err) => {
                warn!(error = %err, "project extraction failed, using defaults");
                ProjectFields::default()
            }
        }
    }

    /// Project name mentioned in a command, if any; `None` on extraction
    /// failure or when no project is named.
    pub async fn project_name(&self, command: &str) -> Option<String> {
        match self.extractor.extract_project_name(command).await {
            Ok(name) => name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            Err(err) => {
                warn!(error = %err, "project name extraction failed");
                None
            }
        }
    }
}
