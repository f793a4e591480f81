//! Command validation - the core rule engine
//!
//! Runs intent-specific rule sets against read-only domain lookups and
//! produces a `ValidationResult`: proceed, or stop with a human-readable
//! message and a structured suggested action.
//!
//! Rule violations accumulate into one space-joined message rather than
//! stopping at the first, with two exceptions that short-circuit: the
//! stop-timer interaction and the create confirmation gate. The suggestion
//! slot holds one action; when several rules fire, the last writer wins.
//!
//! The validator never mutates domain state.

use std::sync::Arc;

use chrono::Utc;
use timemate_domain::constants::{
    ACTION_CREATE, ACTION_DELETE, ACTION_STOP, ACTION_UPDATE, ALL_PROJECTS,
    MAX_ENTRY_DURATION_MINUTES,
};
use timemate_domain::{Intent, Result, SuggestedAction, User, ValidationResult};
use tracing::debug;

use super::fields::FieldExtractor;
use super::ports::{ProjectRepository, TagRepository, TimeEntryRepository};

/// Intent-specific validation against project/tag/timer lookups.
pub struct CommandValidator {
    fields: FieldExtractor,
    projects: Arc<dyn ProjectRepository>,
    tags: Arc<dyn TagRepository>,
    time_entries: Arc<dyn TimeEntryRepository>,
}

impl CommandValidator {
    /// Create a new validator over the given lookups.
    pub fn new(
        fields: FieldExtractor,
        projects: Arc<dyn ProjectRepository>,
        tags: Arc<dyn TagRepository>,
        time_entries: Arc<dyn TimeEntryRepository>,
    ) -> Self {
        Self { fields, projects, tags, time_entries }
    }

    /// Validate a classified command for a resolved user.
    ///
    /// `ListProjects`, `SuggestTask`, `GeneralChat` and `Unknown` are
    /// pass-through; the other intents run the rule sets below. Lookup
    /// failures (storage errors) propagate; user-input problems never do.
    pub async fn validate(
        &self,
        user: &User,
        intent: Intent,
        command: &str,
    ) -> Result<ValidationResult> {
        match intent {
            Intent::CreateTimeEntry => self.validate_time_entry(user, command).await,
            Intent::ManageProject => self.validate_project(user, command).await,
            Intent::AnalyzeTime => self.validate_analytics(user, command).await,
            Intent::ListProjects | Intent::SuggestTask | Intent::GeneralChat | Intent::Unknown => {
                Ok(ValidationResult::pass("No validation required for this intent"))
            }
        }
    }

    async fn validate_time_entry(&self, user: &User, command: &str) -> Result<ValidationResult> {
        let fields = self.fields.time_entry(command).await;
        let mut errors: Vec<String> = Vec::new();
        let mut suggestion: Option<SuggestedAction> = None;

        // Mandatory field validation
        let description = fields.description_trimmed().map(str::to_string);
        if description.is_none() {
            errors.push("Task description is required.".to_string());
            suggestion = Some(SuggestedAction::ProvideDescription);
        }

        // Optional field validation
        if let Some(project_name) = fields.project_name.as_deref().map(str::trim) {
            if !project_name.is_empty()
                && self.projects.find_by_name_and_owner(project_name, user.id).await?.is_none()
            {
                errors.push(format!("Project '{project_name}' does not exist."));
                suggestion =
                    Some(SuggestedAction::CreateProject { project_name: project_name.to_string() });
            }
        }

        for tag_name in fields.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            if self.tags.find_by_name_and_owner(tag_name, user.id).await?.is_none() {
                errors.push(format!("Tag '{tag_name}' does not exist."));
                suggestion = Some(SuggestedAction::CreateTag { tag_name: tag_name.to_string() });
            }
        }

        // Duration validation
        if fields.duration > MAX_ENTRY_DURATION_MINUTES {
            errors.push(
                "Duration exceeds 24 hours. Please specify a duration up to 1440 minutes."
                    .to_string(),
            );
            suggestion = Some(SuggestedAction::AdjustDuration { duration: fields.duration });
        }

        // Time validation
        let start_time = fields.start_or(Utc::now());
        if let Some(end_time) = fields.end_time {
            if end_time <= start_time {
                errors.push("End time must be after start time.".to_string());
                suggestion = Some(SuggestedAction::AdjustTime);
            }
        }

        // Active timer interaction. The stop path is mutually exclusive
        // with dispatch, so it short-circuits instead of accumulating.
        let active_timer = self.time_entries.find_active_for_owner(user.id).await?;
        if fields.action.eq_ignore_ascii_case(ACTION_STOP) {
            return Ok(match active_timer {
                None => ValidationResult::blocked("No active timer to stop.", None),
                Some(timer) => {
                    debug!(timer_id = timer.id, "stop command gated on confirmation");
                    ValidationResult::blocked(
                        format!(
                            "Please confirm: Stop the active timer for '{}'?",
                            timer.description
                        ),
                        Some(SuggestedAction::StopTimer { timer_id: timer.id }),
                    )
                }
            });
        } else if let Some(timer) = active_timer {
            errors.push("An active timer is already running.".to_string());
            suggestion = Some(SuggestedAction::StopTimer { timer_id: timer.id });
        }

        // Every clean create is confirmation-gated before execution.
        if errors.is_empty() && fields.action.eq_ignore_ascii_case(ACTION_CREATE) {
            let description = description.unwrap_or_default();
            let mut message = format!("Confirm time entry: '{description}' from {start_time}");
            if fields.duration > 0 {
                message.push_str(&format!(" for {} minutes", fields.duration));
            }
            message.push_str(". Add project or tags?");
            return Ok(ValidationResult::blocked(
                message,
                Some(SuggestedAction::ConfirmTimeEntry {
                    description,
                    project_name: fields.project_name.clone(),
                    tag_names: fields.tags.clone(),
                    start_time,
                    duration: fields.duration,
                }),
            ));
        }

        if errors.is_empty() {
            Ok(ValidationResult::pass("All dependencies validated successfully"))
        } else {
            Ok(ValidationResult::blocked(errors.join(" "), suggestion))
        }
    }

    async fn validate_project(&self, user: &User, command: &str) -> Result<ValidationResult> {
        let fields = self.fields.project(command).await;
        let mut errors: Vec<String> = Vec::new();
        let mut suggestion: Option<SuggestedAction> = None;

        let Some(project_name) = fields.name_trimmed().map(str::to_string) else {
            return Ok(ValidationResult::blocked(
                "Project name is required.",
                Some(SuggestedAction::ProvideProjectName),
            ));
        };

        let existing = self.projects.find_by_name_and_owner(&project_name, user.id).await?;
        if fields.action.eq_ignore_ascii_case(ACTION_CREATE) {
            match existing {
                Some(_) => {
                    errors.push(format!("Project '{project_name}' already exists."));
                    suggestion = Some(SuggestedAction::UpdateProject {
                        project_name: project_name.clone(),
                    });
                }
                None => {
                    return Ok(ValidationResult::blocked(
                        format!("Confirm creation of project '{project_name}'?"),
                        Some(SuggestedAction::ConfirmProjectCreation {
                            project_name,
                            description: fields.description.clone(),
                        }),
                    ));
                }
            }
        } else if fields.action.eq_ignore_ascii_case(ACTION_UPDATE)
            || fields.action.eq_ignore_ascii_case(ACTION_DELETE)
        {
            let is_update = fields.action.eq_ignore_ascii_case(ACTION_UPDATE);
            match existing {
                None => {
                    errors.push(format!("Project '{project_name}' does not exist."));
                    suggestion = Some(SuggestedAction::CreateProject {
                        project_name: project_name.clone(),
                    });
                }
                Some(_) => {
                    let verb = if is_update { "update" } else { "deletion" };
                    let action = if is_update {
                        SuggestedAction::ConfirmProjectUpdate {
                            project_name: project_name.clone(),
                            description: fields.description.clone(),
                        }
                    } else {
                        SuggestedAction::ConfirmProjectDeletion {
                            project_name: project_name.clone(),
                            description: fields.description.clone(),
                        }
                    };
                    return Ok(ValidationResult::blocked(
                        format!("Confirm {verb} of project '{project_name}'?"),
                        Some(action),
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(ValidationResult::pass("Project action is valid"))
        } else {
            Ok(ValidationResult::blocked(errors.join(" "), suggestion))
        }
    }

    async fn validate_analytics(&self, user: &User, command: &str) -> Result<ValidationResult> {
        if let Some(project_name) = self.fields.project_name(command).await {
            if project_name != ALL_PROJECTS
                && self.projects.find_by_name_and_owner(&project_name, user.id).await?.is_none()
            {
                return Ok(ValidationResult::blocked(
                    format!("Project '{project_name}' does not exist for time analysis."),
                    Some(SuggestedAction::CreateProject { project_name }),
                ));
            }
        }
        Ok(ValidationResult::pass("Analytics query is valid"))
    }
}
