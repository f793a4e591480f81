//! Intent classification
//!
//! Thin wrapper over the extraction backend that guarantees the "never
//! fails" contract: any backend error or unresolvable label maps to
//! `Intent::Unknown`.

use std::sync::Arc;

use timemate_domain::Intent;
use tracing::warn;

use super::ports::CommandExtractor;

/// Maps a command string (plus recent-conversation context) to one intent.
///
/// Tie-break policy when a command is plausible for several intents is
/// encoded in [`Intent::priority`]: `CreateTimeEntry` wins over
/// `ManageProject`, which wins over `AnalyzeTime`, and so on down to
/// `Unknown`. Backends are expected to honor that ordering; deterministic
/// implementations resolve ties with it directly.
pub struct IntentClassifier {
    extractor: Arc<dyn CommandExtractor>,
}

impl IntentClassifier {
    /// Create a new classifier over the given extraction backend.
    pub fn new(extractor: Arc<dyn CommandExtractor>) -> Self {
        Self { extractor }
    }

    /// Classify a command. Never fails and has no side effects.
    pub async fn classify(&self, command: &str, context: &str) -> Intent {
        match self.extractor.classify_intent(command, context).await {
            Ok(intent) => intent,
            Err(err) => {
                warn!(error = %err, "intent classification failed, falling back to UNKNOWN");
                Intent::Unknown
            }
        }
    }
}
