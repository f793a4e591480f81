//! Deterministic rule-based extraction backend
//!
//! Keyword and regex matching over the command text. Far less capable than
//! the LLM backend, but fully deterministic: used offline, as a fallback,
//! and to keep pipeline tests independent of any model. Ambiguity between
//! intents resolves via `Intent::priority`.

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use timemate_core::CommandExtractor;
use timemate_domain::constants::{ACTION_CREATE, ACTION_DELETE, ACTION_STOP, ACTION_UPDATE, ALL_PROJECTS};
use timemate_domain::{Intent, Persona, ProjectFields, Result, TimeEntryFields};

lazy_static! {
    /// Keyword table per intent. A command may match several rows; the
    /// winner is the matching intent with the best priority.
    static ref INTENT_KEYWORDS: Vec<(Intent, Vec<&'static str>)> = vec![
        (
            Intent::CreateTimeEntry,
            vec!["timer", "stopwatch", "log ", "track ", "clock in", "clock out", "stop the"],
        ),
        (
            Intent::ManageProject,
            vec!["create project", "new project", "update project", "delete project",
                 "project named", "project called", "add tag", "create tag", "remove tag"],
        ),
        (
            Intent::AnalyzeTime,
            vec!["how much time", "time did i spend", "summary", "summarize", "hours on",
                 "time on", "report"],
        ),
        (
            Intent::ListProjects,
            vec!["list projects", "my projects", "all of my projects", "show projects",
                 "list tags", "my tags"],
        ),
        (Intent::SuggestTask, vec!["what should i work on", "suggest", "what can i do"]),
        (
            Intent::GeneralChat,
            vec!["how am i doing", "who are you", "hello", "hi ", "thanks", "help"],
        ),
    ];

    static ref HOURS_RE: Regex = Regex::new(r"(?i)\b(\d+)\s*(?:hours?|hrs?)\b").unwrap();
    static ref MINUTES_RE: Regex = Regex::new(r"(?i)\b(\d+)\s*(?:minutes?|mins?)\b").unwrap();
    static ref DESCRIPTION_RE: Regex =
        Regex::new(r"(?i)\bfor\s+([a-z0-9][a-z0-9 _-]*?)(?:\s+on\s+|\s+tagged\b|\s*$)").unwrap();
    static ref ENTRY_PROJECT_RE: Regex =
        Regex::new(r"(?i)\bon\s+(?:project\s+)?([a-z0-9][a-z0-9 _-]*?)\s*$").unwrap();
    static ref TAGS_RE: Regex =
        Regex::new(r"(?i)\btagged\s+(?:with\s+)?([a-z0-9, _-]+)").unwrap();
    static ref PROJECT_NAME_RE: Regex =
        Regex::new(r"(?i)\bproject\s+(?:named\s+|called\s+)?([a-z0-9][a-z0-9 _-]*?)\s*$").unwrap();
}

/// `CommandExtractor` built from keyword tables and regexes.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleBasedExtractor;

impl RuleBasedExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExtractor for RuleBasedExtractor {
    async fn classify_intent(&self, command: &str, _context: &str) -> Result<Intent> {
        let lowered = command.to_lowercase();
        let matched = INTENT_KEYWORDS
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(intent, _)| *intent)
            .min_by_key(|intent| intent.priority());
        Ok(matched.unwrap_or(Intent::Unknown))
    }

    async fn extract_time_entry(&self, command: &str) -> Result<TimeEntryFields> {
        let lowered = command.to_lowercase();
        let action = if lowered.contains("stop") || lowered.contains("clock out") {
            ACTION_STOP
        } else {
            ACTION_CREATE
        };

        // Saturate on absurd values; validation rejects anything past the
        // daily bound anyway.
        let mut duration: i64 = 0;
        if let Some(caps) = HOURS_RE.captures(command) {
            duration = caps[1].parse::<i64>().unwrap_or(0).saturating_mul(60);
        }
        if let Some(caps) = MINUTES_RE.captures(command) {
            duration = duration.saturating_add(caps[1].parse::<i64>().unwrap_or(0));
        }

        let description = DESCRIPTION_RE
            .captures(command)
            .map(|caps| caps[1].trim().to_string())
            .filter(|d| !d.is_empty());
        let project_name =
            ENTRY_PROJECT_RE.captures(command).map(|caps| caps[1].trim().to_string());
        let tags = TAGS_RE
            .captures(command)
            .map(|caps| {
                caps[1]
                    .split([',', ' '])
                    .map(str::trim)
                    .filter(|t| !t.is_empty() && *t != "and")
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(TimeEntryFields {
            description,
            project_name,
            tags,
            action: action.to_string(),
            duration,
            start_time: None,
            end_time: None,
        })
    }

    async fn extract_project(&self, command: &str) -> Result<ProjectFields> {
        let lowered = command.to_lowercase();
        let action = if lowered.contains("delete") || lowered.contains("remove") {
            ACTION_DELETE
        } else if lowered.contains("update") || lowered.contains("rename") {
            ACTION_UPDATE
        } else {
            ACTION_CREATE
        };
        let name = PROJECT_NAME_RE.captures(command).map(|caps| caps[1].trim().to_string());

        Ok(ProjectFields { name, description: String::new(), action: action.to_string() })
    }

    async fn extract_project_name(&self, command: &str) -> Result<Option<String>> {
        if command.to_lowercase().contains("all projects") {
            return Ok(Some(ALL_PROJECTS.to_string()));
        }
        Ok(PROJECT_NAME_RE.captures(command).map(|caps| caps[1].trim().to_string()))
    }

    async fn chat(&self, _command: &str, _context: &str, _persona: &Persona) -> Result<String> {
        Ok("I can help you log time, manage projects, and summarize where your hours go. \
            Try something like 'Start a timer for coding'."
            .to_string())
    }
}
