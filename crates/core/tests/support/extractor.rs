//! Scripted extraction backend
//!
//! Returns pre-programmed classification and field extraction results so
//! pipeline tests are deterministic and independent of any LLM.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use timemate_core::CommandExtractor;
use timemate_domain::{
    Intent, Persona, ProjectFields, Result, TimeEntryFields, TimeMateError,
};

/// Extraction backend with scripted outputs. Records the context string of
/// every classification call for assertions on context assembly.
#[derive(Clone)]
pub struct ScriptedExtractor {
    intent: Intent,
    time_entry: TimeEntryFields,
    project: ProjectFields,
    project_name: Option<String>,
    chat_reply: String,
    fail_extraction: bool,
    fail_classify: bool,
    classify_contexts: Arc<Mutex<Vec<String>>>,
}

impl Default for ScriptedExtractor {
    fn default() -> Self {
        Self {
            intent: Intent::GeneralChat,
            time_entry: TimeEntryFields::default(),
            project: ProjectFields::default(),
            project_name: None,
            chat_reply: "Happy to help with your time tracking.".to_string(),
            fail_extraction: false,
            fail_classify: false,
            classify_contexts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ScriptedExtractor {
    pub fn classifying(intent: Intent) -> Self {
        Self { intent, ..Self::default() }
    }

    pub fn with_time_entry(mut self, fields: TimeEntryFields) -> Self {
        self.time_entry = fields;
        self
    }

    pub fn with_project(mut self, fields: ProjectFields) -> Self {
        self.project = fields;
        self
    }

    pub fn with_project_name(mut self, name: &str) -> Self {
        self.project_name = Some(name.to_string());
        self
    }

    pub fn with_chat_reply(mut self, reply: &str) -> Self {
        self.chat_reply = reply.to_string();
        self
    }

    /// Make every field extraction call fail, exercising the defaulting
    /// recovery path.
    pub fn failing_extraction(mut self) -> Self {
        self.fail_extraction = true;
        self
    }

    /// Make classification fail, exercising the UNKNOWN fallback.
    pub fn failing_classify(mut self) -> Self {
        self.fail_classify = true;
        self
    }

    /// Context strings seen by `classify_intent`, in call order.
    pub fn classify_contexts(&self) -> Vec<String> {
        self.classify_contexts.lock().clone()
    }
}

#[async_trait]
impl CommandExtractor for ScriptedExtractor {
    async fn classify_intent(&self, _command: &str, context: &str) -> Result<Intent> {
        self.classify_contexts.lock().push(context.to_string());
        if self.fail_classify {
            return Err(TimeMateError::Extraction("model unavailable".into()));
        }
        Ok(self.intent)
    }

    async fn extract_time_entry(&self, _command: &str) -> Result<TimeEntryFields> {
        if self.fail_extraction {
            return Err(TimeMateError::Extraction("malformed model output".into()));
        }
        Ok(self.time_entry.clone())
    }

    async fn extract_project(&self, _command: &str) -> Result<ProjectFields> {
        if self.fail_extraction {
            return Err(TimeMateError::Extraction("malformed model output".into()));
        }
        Ok(self.project.clone())
    }

    async fn extract_project_name(&self, _command: &str) -> Result<Option<String>> {
        if self.fail_extraction {
            return Err(TimeMateError::Extraction("malformed model output".into()));
        }
        Ok(self.project_name.clone())
    }

    async fn chat(&self, _command: &str, _context: &str, _persona: &Persona) -> Result<String> {
        Ok(self.chat_reply.clone())
    }
}
