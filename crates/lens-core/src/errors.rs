//! Cross-cutting error types for Lens.
//!
//! Crate-specific errors (`SchemaError`, `ConfigError`) live in their own
//! crates and convert into `CoreError` where they reach the pipeline boundary.

use thiserror::Error;

/// Errors that end a report request. Both are fatal to the request and
/// recoverable by the caller, which must not surface a partial report.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The raw document does not match the expected nested shape.
    ///
    /// `path` is the JSON pointer of the first offending value; an empty
    /// string points at the document root.
    #[error("Validation error at '{path}': {message}")]
    Validation { path: String, message: String },

    /// The document is a valid but empty array of sessions.
    #[error("No session data found")]
    EmptySession,

    /// A fault inside Lens itself (for example a schema that fails to
    /// compile). Never caused by the input document.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation failure at `path`.
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            message: message.into(),
        }
    }
}
