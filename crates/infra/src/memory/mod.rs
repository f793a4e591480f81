//! In-memory adapters
//!
//! Thread-safe in-memory implementations of the core's repository and
//! handler ports. They back local single-process deployments and give
//! integration tests a full pipeline without external storage.

pub mod repositories;
pub mod services;
