//! Conversation orchestration
//!
//! Top-level coordinator for one command: resolve the user, assemble
//! recent-conversation context, classify, validate, dispatch when allowed,
//! format, and persist the resulting turn.
//!
//! A turn is appended on every non-fatal path, blocked or dispatched. Fatal
//! failures (unknown user, storage errors, dispatch failures) propagate to
//! the caller and persist nothing.

use std::sync::Arc;

use timemate_domain::constants::CONTEXT_WINDOW_TURNS;
use timemate_domain::{
    AssistantReply, ConversationTurn, Intent, Persona, Result, SuggestedAction, TimeMateError,
};
use tracing::{debug, info, instrument};

use super::classifier::IntentClassifier;
use super::dispatcher::{DispatchOutcome, DomainDispatcher};
use super::formatter::{ResponseFormatter, ResponseKind};
use super::ports::{ConversationStore, UserRepository};
use super::validator::CommandValidator;

/// Sequential pipeline: classify → validate → dispatch → format → persist.
pub struct ConversationOrchestrator {
    users: Arc<dyn UserRepository>,
    conversations: Arc<dyn ConversationStore>,
    classifier: IntentClassifier,
    validator: CommandValidator,
    dispatcher: DomainDispatcher,
    formatter: ResponseFormatter,
    context_turns: usize,
}

impl ConversationOrchestrator {
    /// Create a new orchestrator over the given components.
    pub fn new(
        users: Arc<dyn UserRepository>,
        conversations: Arc<dyn ConversationStore>,
        classifier: IntentClassifier,
        validator: CommandValidator,
        dispatcher: DomainDispatcher,
    ) -> Self {
        Self {
            users,
            conversations,
            classifier,
            validator,
            dispatcher,
            formatter: ResponseFormatter,
            context_turns: CONTEXT_WINDOW_TURNS,
        }
    }

    /// Override the context window size (defaults to the last 5 turns).
    #[must_use]
    pub const fn with_context_turns(mut self, turns: usize) -> Self {
        self.context_turns = turns;
        self
    }

    /// Process one free-text command for a user.
    ///
    /// The only entry point this pipeline exposes. Synchronous per call:
    /// no internal parallelism, no locking; concurrent invocations are the
    /// surrounding server's concern.
    #[instrument(skip_all, fields(user_id = %user_id))]
    pub async fn process(
        &self,
        user_id: &str,
        command: &str,
        persona: &Persona,
    ) -> Result<AssistantReply> {
        let user = self
            .users
            .find_by_email(user_id)
            .await?
            .ok_or_else(|| TimeMateError::UserNotFound(user_id.to_string()))?;

        let context = self.build_context(user_id).await?;
        let intent = self.classifier.classify(command, &context).await;
        debug!(intent = %intent, "command classified");

        let validation = self.validator.validate(&user, intent, command).await?;
        if !validation.valid {
            return self.finish_blocked(user_id, command, intent, validation, persona).await;
        }

        let outcome = self.dispatcher.dispatch(&user, intent, command, &context, persona).await?;
        // Keep history labels user-meaningful: the chat fallthrough is
        // recorded as GENERAL_CHAT even when the classifier said UNKNOWN.
        let recorded_intent = match outcome {
            DispatchOutcome::Chat(_) => Intent::GeneralChat,
            _ => intent,
        };

        let (base, kind) = self.formatter.outcome_message(&outcome);
        let message = self.formatter.render(&base, persona, kind);

        let turn = ConversationTurn::new(user_id, command, &message, recorded_intent, None);
        self.conversations.append(&turn).await?;
        info!(intent = %recorded_intent, "command dispatched");

        Ok(AssistantReply {
            message,
            intent: recorded_intent,
            requires_action: false,
            action_details: None,
        })
    }

    async fn finish_blocked(
        &self,
        user_id: &str,
        command: &str,
        intent: Intent,
        validation: timemate_domain::ValidationResult,
        persona: &Persona,
    ) -> Result<AssistantReply> {
        let mut base = validation.message;
        if let Some(action) = &validation.suggested_action {
            base.push_str(" Suggested action: ");
            base.push_str(&self.formatter.describe_action(action));
        }
        let message = self.formatter.render(&base, persona, ResponseKind::for_intent(intent));

        let turn = ConversationTurn::new(
            user_id,
            command,
            &message,
            intent,
            validation.suggested_action.clone(),
        );
        self.conversations.append(&turn).await?;
        info!(
            intent = %intent,
            requires_action = turn.requires_action,
            action = validation.suggested_action.as_ref().map(|a| a.kind()).unwrap_or("none"),
            confirmation =
                validation.suggested_action.as_ref().is_some_and(SuggestedAction::is_confirmation),
            "command blocked by validation"
        );

        Ok(AssistantReply {
            message,
            intent,
            requires_action: turn.requires_action,
            action_details: validation.suggested_action,
        })
    }

    /// Last-N turns for a user rendered as a classification/chat context
    /// string; empty when no history exists.
    async fn build_context(&self, user_id: &str) -> Result<String> {
        let turns = self.conversations.recent_for_user(user_id, self.context_turns).await?;
        Ok(turns
            .iter()
            .map(|turn| format!("User: {}\nAssistant: {}", turn.input_text, turn.output_text))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
