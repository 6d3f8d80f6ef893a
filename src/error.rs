//! Error types for taskdeck
//!
//! Exit codes:
//! - 0: Success (including "task not found", which is reported, not fatal)
//! - 2: User error (bad id, bad status, bad config)
//! - 4: Operation failed (storage I/O, malformed store file)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the taskdeck CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for taskdeck operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("invalid ID: {0}")]
    InvalidArgument(String),

    #[error("Unknown status: {0} (expected todo, in-progress, or done)")]
    InvalidStatus(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Operation failures (exit code 4)
    #[error("Failed to read task store {path}: {source}")]
    StorageRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write task store {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Task store {path} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::InvalidStatus(_) | Error::InvalidConfig(_) => {
                exit_codes::USER_ERROR
            }

            Error::StorageRead { .. }
            | Error::StorageWrite { .. }
            | Error::Format { .. }
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for taskdeck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
        }
    }
}
