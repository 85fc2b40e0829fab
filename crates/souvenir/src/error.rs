//! Error types for souvenir.
//!
//! This module defines the crate-wide error type. Playback keeps its own
//! smaller error enum in [`crate::audio`] since denial there is an expected
//! state, not a failure of the application.

use thiserror::Error;

/// The main error type for souvenir operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Data Errors ===
    /// A date literal could not be parsed as `YYYY-MM-DD`.
    #[error("invalid date '{value}': {source}")]
    InvalidDate {
        /// The offending date string.
        value: String,
        /// The underlying parse error.
        #[source]
        source: chrono::ParseError,
    },

    /// The moment store was constructed with no records.
    #[error("the moment store must contain at least one record")]
    EmptyStore,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Terminal or file system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for souvenir operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid-date error for the given literal.
    #[must_use]
    pub fn invalid_date(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::InvalidDate {
            value: value.into(),
            source,
        }
    }

    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error came from malformed date input.
    #[must_use]
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate { .. })
    }
}
