//! Assistant pipeline types
//!
//! Types flowing through the classify → validate → dispatch → format
//! pipeline: the intent taxonomy, validation outcomes, suggested remediation
//! actions, and the persisted conversation turn.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ARCHETYPE_GUIDE, TONE_INSPIRATIONAL};

/// Classified purpose of a user command.
///
/// Closed taxonomy; anything the extraction backend cannot resolve maps to
/// `Unknown` rather than failing classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    CreateTimeEntry,
    ManageProject,
    ListProjects,
    AnalyzeTime,
    SuggestTask,
    GeneralChat,
    Unknown,
}

impl Intent {
    /// Tie-break rank when a command is textually plausible for several
    /// intents: lower wins. Timer and entry-creation commands are the most
    /// time-sensitive, so they take precedence over everything else.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::CreateTimeEntry => 0,
            Self::ManageProject => 1,
            Self::AnalyzeTime => 2,
            Self::ListProjects => 3,
            Self::SuggestTask => 4,
            Self::GeneralChat => 5,
            Self::Unknown => 6,
        }
    }

    /// Stable wire label, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateTimeEntry => "CREATE_TIME_ENTRY",
            Self::ManageProject => "MANAGE_PROJECT",
            Self::ListProjects => "LIST_PROJECTS",
            Self::AnalyzeTime => "ANALYZE_TIME",
            Self::SuggestTask => "SUGGEST_TASK",
            Self::GeneralChat => "GENERAL_CHAT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse a label as produced by the extraction backend. Tolerates
    /// surrounding whitespace and case differences; returns `None` for
    /// anything outside the taxonomy.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "CREATE_TIME_ENTRY" => Some(Self::CreateTimeEntry),
            "MANAGE_PROJECT" => Some(Self::ManageProject),
            "LIST_PROJECTS" => Some(Self::ListProjects),
            "ANALYZE_TIME" => Some(Self::AnalyzeTime),
            "SUGGEST_TASK" => Some(Self::SuggestTask),
            "GENERAL_CHAT" => Some(Self::GeneralChat),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering persona supplied per request. Purely a formatting parameter
/// with no persistence lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub tone: String,
    pub archetype: String,
}

impl Persona {
    #[must_use]
    pub fn new(tone: impl Into<String>, archetype: impl Into<String>) -> Self {
        Self { tone: tone.into(), archetype: archetype.into() }
    }

    /// The only tone/archetype pair with a non-default rendering.
    /// Comparison is case-insensitive.
    #[must_use]
    pub fn is_inspirational_guide(&self) -> bool {
        self.tone.eq_ignore_ascii_case(TONE_INSPIRATIONAL)
            && self.archetype.eq_ignore_ascii_case(ARCHETYPE_GUIDE)
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::new("Neutral", "Assistant")
    }
}

/// Structured remediation or confirmation hint attached to a blocking
/// validation message. The client uses the payload to pre-fill a follow-up
/// action.
///
/// Serialized with an `action` tag and camelCase payload keys so the wire
/// shape matches the historical string-keyed action maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SuggestedAction {
    ProvideDescription,
    ProvideProjectName,
    CreateProject {
        project_name: String,
    },
    CreateTag {
        tag_name: String,
    },
    StopTimer {
        timer_id: i64,
    },
    AdjustDuration {
        duration: i64,
    },
    AdjustTime,
    UpdateProject {
        project_name: String,
    },
    ConfirmTimeEntry {
        description: String,
        project_name: Option<String>,
        tag_names: Vec<String>,
        start_time: chrono::DateTime<Utc>,
        duration: i64,
    },
    ConfirmProjectCreation {
        project_name: String,
        description: String,
    },
    ConfirmProjectUpdate {
        project_name: String,
        description: String,
    },
    ConfirmProjectDeletion {
        project_name: String,
        description: String,
    },
}

impl SuggestedAction {
    /// Stable kind label, matching the serde `action` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ProvideDescription => "provideDescription",
            Self::ProvideProjectName => "provideProjectName",
            Self::CreateProject { .. } => "createProject",
            Self::CreateTag { .. } => "createTag",
            Self::StopTimer { .. } => "stopTimer",
            Self::AdjustDuration { .. } => "adjustDuration",
            Self::AdjustTime => "adjustTime",
            Self::UpdateProject { .. } => "updateProject",
            Self::ConfirmTimeEntry { .. } => "confirmTimeEntry",
            Self::ConfirmProjectCreation { .. } => "confirmProjectCreation",
            Self::ConfirmProjectUpdate { .. } => "confirmProjectUpdate",
            Self::ConfirmProjectDeletion { .. } => "confirmProjectDeletion",
        }
    }

    /// Whether this action is a confirmation gate (valid input awaiting an
    /// explicit user go-ahead) rather than a remediation for bad input.
    #[must_use]
    pub const fn is_confirmation(&self) -> bool {
        matches!(
            self,
            Self::StopTimer { .. }
                | Self::ConfirmTimeEntry { .. }
                | Self::ConfirmProjectCreation { .. }
                | Self::ConfirmProjectUpdate { .. }
                | Self::ConfirmProjectDeletion { .. }
        )
    }
}

/// Outcome of command validation.
///
/// Build through `pass` and `blocked`: only the blocked constructor
/// populates `suggested_action`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
    pub suggested_action: Option<SuggestedAction>,
}

impl ValidationResult {
    /// Validation passed; dispatch may proceed.
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self { valid: true, message: message.into(), suggested_action: None }
    }

    /// Validation blocked the command, either as an error or as a
    /// confirmation gate. Dispatch must not run.
    #[must_use]
    pub fn blocked(message: impl Into<String>, suggested_action: Option<SuggestedAction>) -> Self {
        Self { valid: false, message: message.into(), suggested_action }
    }
}

/// One processed command, appended to the per-user conversation log.
/// Immutable after creation; never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub id: String,
    pub user_id: String,
    pub input_text: String,
    pub output_text: String,
    pub intent: Intent,
    pub timestamp_ms: i64,
    pub requires_action: bool,
    pub action_details: Option<SuggestedAction>,
}

impl ConversationTurn {
    /// Build a turn stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        input_text: impl Into<String>,
        output_text: impl Into<String>,
        intent: Intent,
        action_details: Option<SuggestedAction>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            input_text: input_text.into(),
            output_text: output_text.into(),
            intent,
            timestamp_ms: Utc::now().timestamp_millis(),
            requires_action: action_details.is_some(),
            action_details,
        }
    }
}

/// Response returned from `ConversationOrchestrator::process` — the sole
/// externally observable contract of the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub message: String,
    pub intent: Intent,
    pub requires_action: bool,
    pub action_details: Option<SuggestedAction>,
}
