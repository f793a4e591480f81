//! OpenAI-compatible extraction backend
//!
//! Talks to any chat-completions endpoint (OpenAI, Azure, local inference
//! servers). Transport problems surface as `TimeMateError::Network`;
//! malformed model output never propagates — field extraction falls back
//! to the documented defaults and classification falls back to UNKNOWN.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use timemate_core::CommandExtractor;
use timemate_domain::{
    Intent, LlmConfig, Persona, ProjectFields, Result, TimeEntryFields, TimeMateError,
};
use tracing::warn;

use super::strip_code_fences;

const CLASSIFY_SYSTEM_PROMPT: &str = "\
Your role is to classify the user's command into one of the following intents, considering the conversation context:
- CREATE_TIME_ENTRY: Commands to manage time entries: start a timer, stop a timer, log, edit or delete an entry.
- ANALYZE_TIME: Commands to summarize time entries by period, project, or tag.
- MANAGE_PROJECT: Commands to create, update, or delete projects and tags.
- LIST_PROJECTS: Commands to list projects or tags.
- SUGGEST_TASK: Commands requesting task suggestions.
- GENERAL_CHAT: General conversation, motivation, onboarding questions.
- UNKNOWN: Unclear, incomplete, or garbled commands.

Prioritize CREATE_TIME_ENTRY for commands involving timers, then MANAGE_PROJECT. Use context to resolve ambiguity (e.g. a recent timer creation implies stop). Respond with exactly one intent label and nothing else.";

const TIME_ENTRY_SYSTEM_PROMPT: &str = "\
Extract the following details from the user's command:
- description: The task description, if mentioned (e.g. \"Coding\"). Set to null if not mentioned.
- projectName: The project name, if mentioned (e.g. \"Project X\"). Set to null if not mentioned.
- tags: A list of tag names, if mentioned (e.g. [\"coding\", \"urgent\"]). Set to an empty list if not mentioned.
- action: The action to perform (\"create\" for new entries, \"stop\" for stopping an active timer).
- duration: The duration in minutes, if specified (e.g. 60). Set to 0 if not specified.
- startTime: The start time in RFC 3339 format (e.g. \"2025-05-03T10:00:00Z\"). Set to null if not specified.
- endTime: The end time in RFC 3339 format, if specified. Set to null if not mentioned.

Return a JSON object with the extracted details and nothing else.";

const PROJECT_SYSTEM_PROMPT: &str = "\
Extract the following details from the user's command:
- name: The project name, if mentioned (e.g. \"Sprint 5\"). Set to null if not mentioned.
- description: The project description, if mentioned (e.g. \"New client\"). Set to an empty string if not mentioned.
- action: The action to perform (\"create\", \"update\", \"delete\"). Default to \"create\" if not specified.

Return a JSON object with the extracted details and nothing else.";

const PROJECT_NAME_SYSTEM_PROMPT: &str = "\
Extract the project name from the user's command, if mentioned (e.g. \"Sprint 5\").
Return the project name as a plain string, or null if not mentioned.";

/// `CommandExtractor` backed by an OpenAI-compatible chat endpoint.
pub struct OpenAiExtractor {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OpenAiExtractor {
    /// Build a client from the given backend settings.
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| TimeMateError::Network(format!("building http client: {err}")))?;
        Ok(Self { client, config })
    }

    /// One chat completion round trip, returning the raw message content.
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let url =
            format!("{}/v1/chat/completions", self.config.base_url.trim_end_matches('/'));
        let body = json!({
            "model": self.config.model,
            "temperature": 0.0,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
        });

        let mut request = self.client.post(&url).json(&body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| TimeMateError::Network(format!("extraction request failed: {err}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(TimeMateError::Network(format!(
                "extraction backend returned {status}"
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|err| TimeMateError::Extraction(format!("invalid completion body: {err}")))?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TimeMateError::Extraction("completion had no choices".into()))
    }
}

#[async_trait]
impl CommandExtractor for OpenAiExtractor {
    async fn classify_intent(&self, command: &str, context: &str) -> Result<Intent> {
        let user = format!("Context: {context}\nCommand: {command}");
        let label = self.complete(CLASSIFY_SYSTEM_PROMPT, &user).await?;
        Ok(Intent::parse(&label).unwrap_or_else(|| {
            warn!(label = %label.trim(), "unrecognized intent label from backend");
            Intent::Unknown
        }))
    }

    async fn extract_time_entry(&self, command: &str) -> Result<TimeEntryFields> {
        let raw = self.complete(TIME_ENTRY_SYSTEM_PROMPT, command).await?;
        Ok(parse_or_default(&raw, "time entry"))
    }

    async fn extract_project(&self, command: &str) -> Result<ProjectFields> {
        let raw = self.complete(PROJECT_SYSTEM_PROMPT, command).await?;
        Ok(parse_or_default(&raw, "project"))
    }

    async fn extract_project_name(&self, command: &str) -> Result<Option<String>> {
        let raw = self.complete(PROJECT_NAME_SYSTEM_PROMPT, command).await?;
        let name = strip_code_fences(&raw).trim_matches('"').trim().to_string();
        Ok(if name.is_empty() || name.eq_ignore_ascii_case("null") { None } else { Some(name) })
    }

    async fn chat(&self, command: &str, context: &str, persona: &Persona) -> Result<String> {
        let system = format!(
            "You are a helpful assistant for a time tracking application with an {} tone, \
             acting as a {}. Use the following conversation history for context:\n{}\n\n\
             Provide a concise and relevant response, staying in character. For time-tracking \
             queries, suggest actions like creating time entries or reviewing projects.",
            persona.tone, persona.archetype, context
        );
        self.complete(&system, command).await
    }
}

/// Parse model JSON leniently; malformed output collapses to defaults
/// rather than an error.
fn parse_or_default<T: serde::de::DeserializeOwned + Default>(raw: &str, what: &str) -> T {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str(cleaned) {
        Ok(fields) => fields,
        Err(err) => {
            warn!(error = %err, what, "malformed extraction output, using defaults");
            T::default()
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}
