//! Logging setup.
//!
//! The table emits `tracing` events; this module installs a `tracing-subscriber`
//! formatter for hosts that do not bring their own.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{PukaError, PukaResult};

/// Installs the global tracing subscriber described by `config`.
///
/// `RUST_LOG`, when set, takes precedence over `config.level`.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> PukaResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| PukaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}
