//! Puka Cuckoo Library
//!
//! An in-memory cuckoo hash set for `i32` keys, together with the configuration,
//! error and logging plumbing needed to embed it in a host program.
//!
//! # Architecture
//!
//! - [`data_structures::puka_cuckoo_hash`]: the table, its hash strategies and the
//!   capacity schedule it grows through
//! - [`config`]: serde-backed settings loaded from files and `PUKA__*` environment
//!   variables
//! - [`error`]: explicit error types for every layer
//! - [`logging`]: tracing subscriber setup

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use std::path::Path;

/// Version information for the Puka Cuckoo crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads configuration from `config_path` (if any) and the environment, then installs
/// the tracing subscriber it describes.
///
/// # Errors
///
/// Configuration errors, or a logging error if a global subscriber already exists.
pub fn init<P: AsRef<Path>>(config_path: Option<P>) -> error::PukaResult<config::PukaConfig> {
    let loaded = config::ConfigLoader::new(config_path, config::ENV_PREFIX).load()?;
    logging::init_logging(&loaded.log)?;
    tracing::info!(version = VERSION, "Puka Cuckoo initialised");
    Ok(loaded)
}
