//! Conversational command pipeline
//!
//! One `ConversationOrchestrator::process` call runs classification,
//! validation, optional dispatch, formatting, and persistence sequentially.

pub mod classifier;
pub mod dispatcher;
pub mod fields;
pub mod formatter;
pub mod orchestrator;
pub mod ports;
pub mod validator;
