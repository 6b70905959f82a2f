//! Error types for the lineup ecosystem.

use thiserror::Error;

/// Errors that can occur in lineup operations.
#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for lineup operations.
pub type LineupResult<T> = Result<T, LineupError>;
