//! Error types for uurrooster.

use thiserror::Error;

/// Errors that can occur while configuring or loading a schedule.
#[derive(Error, Debug)]
pub enum UurroosterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {field} '{value}'. Expected YYYY-MM-DDTHH:MM:SS")]
    InvalidDateTime { field: &'static str, value: String },

    #[error("Event store is no longer running")]
    StoreClosed,
}

/// Result type alias for uurrooster operations.
pub type UurroosterResult<T> = Result<T, UurroosterError>;
