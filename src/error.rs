//! Error types for folio

use thiserror::Error;

/// Errors raised outside the submission outcome taxonomy
#[derive(Debug, Error)]
pub enum Error {
    /// A submission is already in flight on this controller
    #[error("a submission is already in progress")]
    SubmissionInFlight,

    /// Form input failed local validation
    #[error("invalid form input: {0}")]
    Validation(String),

    /// Transport-level failure (connect, DNS, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// Configuration value is missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// Unknown skill category
    #[error("unknown skill category: {0}")]
    UnknownCategory(String),

    /// Unknown theme name
    #[error("unknown theme: {0} (expected 'dark' or 'light')")]
    UnknownTheme(String),

    /// Interactive prompt failed
    #[error("prompt error: {0}")]
    Prompt(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
