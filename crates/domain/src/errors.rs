//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for TimeMate
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TimeMateError {
    /// The user id on the request does not resolve to a known user. This is
    /// a session inconsistency, not a user-input problem, so it is never
    /// folded into a `ValidationResult`.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// A domain handler failed mid-dispatch. The action may have partially
    /// completed downstream; callers should treat it as not-yet-confirmed
    /// and retry.
    #[error("Dispatch failed: {0}")]
    Dispatch(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for TimeMate operations
pub type Result<T> = std::result::Result<T, TimeMateError>;

/// Convert a `TimeMateError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &TimeMateError) -> &'static str {
    match error {
        TimeMateError::UserNotFound(_) => "user_not_found",
        TimeMateError::Dispatch(_) => "dispatch_failed",
        TimeMateError::Extraction(_) => "extraction",
        TimeMateError::Storage(_) => "storage",
        TimeMateError::Config(_) => "config",
        TimeMateError::Network(_) => "network",
        TimeMateError::InvalidInput(_) => "invalid_input",
        TimeMateError::Internal(_) => "internal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_labels_are_stable() {
        let cases = [
            (TimeMateError::UserNotFound("u".into()), "user_not_found"),
            (TimeMateError::Dispatch("d".into()), "dispatch_failed"),
            (TimeMateError::Extraction("e".into()), "extraction"),
            (TimeMateError::Storage("s".into()), "storage"),
            (TimeMateError::Config("c".into()), "config"),
            (TimeMateError::Network("n".into()), "network"),
            (TimeMateError::InvalidInput("i".into()), "invalid_input"),
            (TimeMateError::Internal("i".into()), "internal"),
        ];
        for (error, label) in cases {
            assert_eq!(error_label(&error), label);
        }
    }
}
