//! Domain dispatch
//!
//! For a validated command, marshals extracted fields into the correct
//! domain handler and wraps its result for formatting. Downstream failures
//! surface as `TimeMateError::Dispatch`; the orchestrator does not persist
//! a turn for those, since the action may have partially completed.

use std::sync::Arc;

use timemate_domain::{
    error_label, Intent, Persona, Project, Result, TimeEntry, TimeMateError, TimeSummary, User,
};
use tracing::{error, instrument};

use super::fields::FieldExtractor;
use super::ports::{
    AnalyticsService, CommandExtractor, ProjectRepository, ProjectService, TimeEntryService,
};

/// Result of dispatching a validated command, consumed only by the
/// response formatter.
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    TimeEntry(TimeEntry),
    Project(Project),
    ProjectList(Vec<Project>),
    Summary(TimeSummary),
    Chat(String),
}

/// Routes validated commands to their domain handlers.
pub struct DomainDispatcher {
    extractor: Arc<dyn CommandExtractor>,
    fields: FieldExtractor,
    time_entries: Arc<dyn TimeEntryService>,
    projects: Arc<dyn ProjectService>,
    analytics: Arc<dyn AnalyticsService>,
    project_repo: Arc<dyn ProjectRepository>,
}

impl DomainDispatcher {
    /// Create a new dispatcher over the given handlers and lookups.
    pub fn new(
        extractor: Arc<dyn CommandExtractor>,
        time_entries: Arc<dyn TimeEntryService>,
        projects: Arc<dyn ProjectService>,
        analytics: Arc<dyn AnalyticsService>,
        project_repo: Arc<dyn ProjectRepository>,
    ) -> Self {
        let fields = FieldExtractor::new(Arc::clone(&extractor));
        Self { extractor, fields, time_entries, projects, analytics, project_repo }
    }

    /// Dispatch a validated command.
    ///
    /// `context` is the recent-conversation window, used only by the
    /// general-chat fallthrough (`GeneralChat`, `Unknown`, and anything
    /// without a structured handler).
    #[instrument(skip_all, fields(intent = %intent, user_id = user.id))]
    pub async fn dispatch(
        &self,
        user: &User,
        intent: Intent,
        command: &str,
        context: &str,
        persona: &Persona,
    ) -> Result<DispatchOutcome> {
        match intent {
            Intent::CreateTimeEntry => {
                let fields = self.fields.time_entry(command).await;
                let entry = self
                    .time_entries
                    .create_entry(user, &fields)
                    .await
                    .map_err(|err| dispatch_failed("create time entry", &err))?;
                Ok(DispatchOutcome::TimeEntry(entry))
            }
            Intent::ManageProject => {
                let fields = self.fields.project(command).await;
                let project = self
                    .projects
                    .create_project(user, &fields)
                    .await
                    .map_err(|err| dispatch_failed("manage project", &err))?;
                Ok(DispatchOutcome::Project(project))
            }
            Intent::ListProjects => {
                let projects = self.project_repo.find_by_owner(user.id).await?;
                Ok(DispatchOutcome::ProjectList(projects))
            }
            Intent::AnalyzeTime => {
                let summary = self
                    .analytics
                    .summarize(user, command)
                    .await
                    .map_err(|err| dispatch_failed("summarize time", &err))?;
                Ok(DispatchOutcome::Summary(summary))
            }
            Intent::SuggestTask | Intent::GeneralChat | Intent::Unknown => {
                let reply = self
                    .extractor
                    .chat(command, context, persona)
                    .await
                    .map_err(|err| dispatch_failed("general chat", &err))?;
                Ok(DispatchOutcome::Chat(reply))
            }
        }
    }
}

fn dispatch_failed(operation: &str, cause: &TimeMateError) -> TimeMateError {
    error!(operation, error = %cause, error_kind = error_label(cause), "domain handler failed");
    TimeMateError::Dispatch(format!("{operation}: {cause}"))
}
