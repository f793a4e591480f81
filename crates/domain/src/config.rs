//! Configuration structures
//!
//! Pure data definitions; loading lives in `timemate-infra::config`.

use serde::{Deserialize, Serialize};

use crate::constants::CONTEXT_WINDOW_TURNS;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Extraction backend settings
    pub llm: LlmConfig,
    /// Conversation pipeline settings
    #[serde(default)]
    pub conversation: ConversationConfig,
}

/// Settings for the OpenAI-compatible extraction backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the chat-completions endpoint (no trailing slash)
    pub base_url: String,
    /// Bearer token; optional for local inference servers
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model identifier passed on every request
    pub model: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Settings for the conversation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Number of recent turns used as classification/chat context
    pub context_turns: usize,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self { context_turns: CONTEXT_WINDOW_TURNS }
    }
}

const fn default_request_timeout() -> u64 {
    30
}
