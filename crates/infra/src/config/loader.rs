//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Loads a local `.env` file into the environment, if present
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `TIMEMATE_LLM_BASE_URL`: Base URL of the chat-completions endpoint
//! - `TIMEMATE_LLM_API_KEY`: Bearer token (optional, for hosted backends)
//! - `TIMEMATE_LLM_MODEL`: Model identifier
//! - `TIMEMATE_LLM_TIMEOUT_SECS`: Per-request timeout in seconds (optional)
//! - `TIMEMATE_CONTEXT_TURNS`: Conversation context window size (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./timemate.json` or `./timemate.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use timemate_domain::constants::CONTEXT_WINDOW_TURNS;
use timemate_domain::{Config, ConversationConfig, LlmConfig, Result, TimeMateError};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables (after sourcing a
/// `.env` file when one exists). If any required variables are missing,
/// falls back to loading from a config file.
///
/// # Errors
/// Returns `TimeMateError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// `TIMEMATE_LLM_BASE_URL` and `TIMEMATE_LLM_MODEL` are required; the rest
/// fall back to their documented defaults.
///
/// # Errors
/// Returns `TimeMateError::Config` if required variables are missing or
/// have invalid values.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("TIMEMATE_LLM_BASE_URL")?;
    let model = env_var("TIMEMATE_LLM_MODEL")?;
    let api_key = std::env::var("TIMEMATE_LLM_API_KEY").ok();
    let request_timeout_secs = env_parsed("TIMEMATE_LLM_TIMEOUT_SECS", 30)?;
    let context_turns = env_parsed("TIMEMATE_CONTEXT_TURNS", CONTEXT_WINDOW_TURNS)?;

    Ok(Config {
        llm: LlmConfig { base_url, api_key, model, request_timeout_secs },
        conversation: ConversationConfig { context_turns },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `TimeMateError::Config` if no file is found, the format is
/// invalid, or required fields are missing.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(TimeMateError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            TimeMateError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| TimeMateError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content; format is detected by file
/// extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TimeMateError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TimeMateError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(TimeMateError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("timemate.json"),
            cwd.join("timemate.toml"),
            cwd.join("../config.json"),
            cwd.join("../config.toml"),
        ]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("timemate.json"),
                exe_dir.join("timemate.toml"),
            ]);
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        TimeMateError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Optional numeric environment variable with a default. Set-but-invalid
/// values are an error, not silently defaulted.
fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| TimeMateError::Config(format!("Invalid value for {key}: {raw}"))),
        Err(_) => Ok(default),
    }
}
