//! Error types for the CLI

use std::path::PathBuf;

use criteria_demo::CriteriaError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Opening, creating or querying the database failed
    #[error("Database error: {0}")]
    Database(#[from] CriteriaError),

    /// `get` against a database file that was never seeded
    #[error("database {} does not exist; run `criteria-demo seed` first", .0.display())]
    MissingDatabase(PathBuf),

    /// A dispatched request returned a non-2xx status
    #[error("request failed with status {status}: {message}")]
    Request { status: u16, message: String },

    /// Other errors
    #[error("{0}")]
    Other(String),
}
