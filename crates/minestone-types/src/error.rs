//! Error types for minestone.

use thiserror::Error;

/// Result type alias for minestone operations.
pub type Result<T> = std::result::Result<T, MinestoneError>;

/// Errors that can occur while estimating an issuance milestone.
#[derive(Error, Debug)]
pub enum MinestoneError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Feed payload could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid configuration (bad schedule, unreachable threshold).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
