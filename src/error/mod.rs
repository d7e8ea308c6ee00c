//! Error module for the Puka Cuckoo crate.
//!
//! Each layer owns an explicit error type: the table reports
//! [`PukaCuckooHashError`], configuration loading reports [`config::ConfigError`].
//! [`PukaError`] wraps both for callers that drive the whole crate.

use thiserror::Error;

pub mod config;

use crate::data_structures::puka_cuckoo_hash::PukaCuckooHashError;

/// Result type alias used at the crate boundary.
pub type PukaResult<T> = Result<T, PukaError>;

/// Core error enum for the Puka Cuckoo crate.
#[derive(Error, Debug)]
pub enum PukaError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the hash table itself.
    #[error("Table error: {0}")]
    Table(#[from] PukaCuckooHashError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
