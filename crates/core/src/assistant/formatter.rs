//! Response formatting
//!
//! Renders dispatch outcomes and validator messages into user-facing text
//! and applies the persona transformation in one place. Each response kind
//! carries a fixed cycle index, so the Inspirational/Guide wrap is
//! deterministic per kind without random state and phrasing does not
//! repeat across consecutive kinds.

use timemate_domain::{Intent, Persona, Project, SuggestedAction};

use super::dispatcher::DispatchOutcome;

/// Prefix pool for the Inspirational/Guide persona.
const PREFIXES: [&str; 5] = [
    "You're blazing a trail!",
    "Your momentum is unstoppable!",
    "You're crushing it!",
    "Keep pushing the boundaries!",
    "Your progress is inspiring!",
];

/// Suffix pool for the Inspirational/Guide persona.
const SUFFIXES: [&str; 5] = [
    "Keep shining bright!",
    "Stay on this incredible path!",
    "You're destined for greatness!",
    "Keep soaring to new heights!",
    "Your journey is amazing!",
];

/// Response kinds, each with its own persona cycle constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    GeneralChat,
    TimeEntry,
    Project,
    ProjectList,
    Analytics,
}

impl ResponseKind {
    /// Per-kind constant selecting the persona prefix/suffix pair.
    const fn cycle_index(self) -> usize {
        match self {
            Self::GeneralChat => 1,
            Self::TimeEntry => 2,
            Self::Project => 3,
            Self::ProjectList => 4,
            Self::Analytics => 5,
        }
    }

    /// Kind used when rendering a message about a command of this intent
    /// (validation messages included).
    #[must_use]
    pub const fn for_intent(intent: Intent) -> Self {
        match intent {
            Intent::CreateTimeEntry => Self::TimeEntry,
            Intent::ManageProject => Self::Project,
            Intent::ListProjects => Self::ProjectList,
            Intent::AnalyzeTime => Self::Analytics,
            Intent::SuggestTask | Intent::GeneralChat | Intent::Unknown => Self::GeneralChat,
        }
    }
}

/// Stateless renderer for pipeline responses.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Apply the persona transformation to a base message.
    ///
    /// Only the Inspirational tone with the Guide archetype changes the
    /// text; every other combination returns the base message unchanged.
    /// Pure and deterministic for a given kind.
    #[must_use]
    pub fn render(&self, base: &str, persona: &Persona, kind: ResponseKind) -> String {
        if persona.is_inspirational_guide() {
            let index = kind.cycle_index();
            format!(
                "{} {} {}",
                PREFIXES[index % PREFIXES.len()],
                base,
                SUFFIXES[index % SUFFIXES.len()]
            )
        } else {
            base.to_string()
        }
    }

    /// Base message and response kind for a dispatch outcome.
    #[must_use]
    pub fn outcome_message(&self, outcome: &DispatchOutcome) -> (String, ResponseKind) {
        match outcome {
            DispatchOutcome::TimeEntry(entry) => (
                format!(
                    "Time entry created: {} for project {}, started at {}, duration {} minutes",
                    entry.description,
                    entry.project_name.as_deref().unwrap_or("None"),
                    entry.start_time,
                    entry.duration_minutes
                ),
                ResponseKind::TimeEntry,
            ),
            DispatchOutcome::Project(project) => (
                format!(
                    "Project created: {} (Client: {})",
                    project.name,
                    project.client.as_deref().unwrap_or("None")
                ),
                ResponseKind::Project,
            ),
            DispatchOutcome::ProjectList(projects) => {
                (format_project_list(projects), ResponseKind::ProjectList)
            }
            DispatchOutcome::Summary(summary) => (
                format!(
                    "Time summary for {}: {} minutes spent on {}",
                    summary.period, summary.total_minutes, summary.project_name
                ),
                ResponseKind::Analytics,
            ),
            DispatchOutcome::Chat(reply) => (reply.clone(), ResponseKind::GeneralChat),
        }
    }

    /// Human-readable rendering of a suggested action, appended to blocked
    /// validation messages. Kinds without specific remediation text fall
    /// back to a generic prompt rather than failing.
    #[must_use]
    pub fn describe_action(&self, action: &SuggestedAction) -> String {
        match action {
            SuggestedAction::CreateProject { project_name } => {
                format!("Create a new project named '{project_name}'.")
            }
            SuggestedAction::CreateTag { tag_name } => {
                format!("Create a new tag named '{tag_name}'.")
            }
            SuggestedAction::StopTimer { timer_id } => {
                format!("Stop the active timer (ID: {timer_id}).")
            }
            SuggestedAction::UpdateProject { project_name } => {
                format!("Update the existing project named '{project_name}'.")
            }
            SuggestedAction::AdjustDuration { .. } => {
                "Adjust the duration to be within 24 hours (1440 minutes).".to_string()
            }
            _ => "Resolve the issue and try again.".to_string(),
        }
    }
}

fn format_project_list(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "You don't have any projects yet. Ready to create one to kickstart your journey?"
            .to_string();
    }
    let lines: Vec<String> = projects
        .iter()
        .map(|p| format!("- {} (Client: {})", p.name, p.client.as_deref().unwrap_or("None")))
        .collect();
    format!("Here are your projects:\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inspirational() -> Persona {
        Persona::new("Inspirational", "Guide")
    }

    #[test]
    fn neutral_persona_returns_base_unchanged() {
        let formatter = ResponseFormatter;
        let base = "Time entry created";
        assert_eq!(formatter.render(base, &Persona::default(), ResponseKind::TimeEntry), base);
        assert_eq!(
            formatter.render(base, &Persona::new("Inspirational", "Mentor"), ResponseKind::TimeEntry),
            base
        );
    }

    #[test]
    fn inspirational_guide_wrap_is_deterministic_per_kind() {
        let formatter = ResponseFormatter;
        let first = formatter.render("msg", &inspirational(), ResponseKind::Analytics);
        let second = formatter.render("msg", &inspirational(), ResponseKind::Analytics);
        assert_eq!(first, second);
        assert!(first.contains("msg"));
        assert_ne!(first, "msg");
    }

    #[test]
    fn different_kinds_select_different_phrasing() {
        let formatter = ResponseFormatter;
        let chat = formatter.render("msg", &inspirational(), ResponseKind::GeneralChat);
        let entry = formatter.render("msg", &inspirational(), ResponseKind::TimeEntry);
        assert_ne!(chat, entry);
    }

    #[test]
    fn persona_match_ignores_case() {
        let formatter = ResponseFormatter;
        let wrapped =
            formatter.render("msg", &Persona::new("inspirational", "guide"), ResponseKind::Project);
        assert_ne!(wrapped, "msg");
    }

    #[test]
    fn empty_project_list_has_friendly_message() {
        let formatter = ResponseFormatter;
        let (message, kind) = formatter.outcome_message(&DispatchOutcome::ProjectList(vec![]));
        assert_eq!(kind, ResponseKind::ProjectList);
        assert!(message.contains("don't have any projects yet"));
    }

    #[test]
    fn project_list_includes_clients() {
        let formatter = ResponseFormatter;
        let projects = vec![
            Project { id: 1, name: "Sprint 5".into(), client: Some("Acme".into()), owner_id: 1 },
            Project { id: 2, name: "Internal".into(), client: None, owner_id: 1 },
        ];
        let (message, _) = formatter.outcome_message(&DispatchOutcome::ProjectList(projects));
        assert!(message.contains("- Sprint 5 (Client: Acme)"));
        assert!(message.contains("- Internal (Client: None)"));
    }

    #[test]
    fn remediation_text_covers_known_kinds_and_falls_back() {
        let formatter = ResponseFormatter;
        assert_eq!(
            formatter.describe_action(&SuggestedAction::CreateTag { tag_name: "urgent".into() }),
            "Create a new tag named 'urgent'."
        );
        assert_eq!(
            formatter.describe_action(&SuggestedAction::StopTimer { timer_id: 42 }),
            "Stop the active timer (ID: 42)."
        );
        assert_eq!(
            formatter.describe_action(&SuggestedAction::AdjustTime),
            "Resolve the issue and try again."
        );
    }
}
