//! Tracing initialization

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG` when set, defaulting to info-level output for the
/// workspace crates. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("timemate=info,timemate_core=info,timemate_infra=info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).try_init();
}
