//! Error types for the registrar adapter system
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for registrar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the registrar adapter system
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (missing credentials, unknown adapter type)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or TLS-level failure reaching the registrar
    #[error("{0}")]
    Transport(String),

    /// HTTP succeeded but the body is not a JSON object; carries the raw body
    #[error("Invalid registrar API response: {0}")]
    InvalidResponse(String),

    /// Structured error returned by the registrar (non-200 envelope code);
    /// the message is the registrar's own description when available
    #[error("{0}")]
    Api(String),

    /// Operation the registrar cannot perform (e.g. registrar-side deletion)
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// Invalid input from the calling platform
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid-response error carrying the raw body text
    pub fn invalid_response(raw: impl Into<String>) -> Self {
        Self::InvalidResponse(raw.into())
    }

    /// Create a registrar API error
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create an unsupported-operation error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
