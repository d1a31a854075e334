//! Error type shared by the store, the views, the CLI handlers and the
//! exporters.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The export document could not be read or parsed. The surface shows
    /// the empty state when this happens at start-up.
    #[error("Unable to load journal data from {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Malformed journal document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Unable to serialize export rows: {0}")]
    Serialize(serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
