//! Schema validation error types.

use lens_core::CoreError;
use thiserror::Error;

/// Errors from the schema registry and validator.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("Validation failed at '{path}': {message}")]
    ValidationFailed {
        /// JSON pointer of the first offending value (`""` is the root).
        path: String,
        message: String,
        /// Total number of violations found, including the first.
        error_count: usize,
    },

    /// Schema generation or compilation error.
    #[error("Schema generation error: {0}")]
    Generation(String),
}

impl From<SchemaError> for CoreError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::ValidationFailed { path, message, .. } => Self::Validation { path, message },
            SchemaError::NotFound(_) | SchemaError::Generation(_) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn validation_failure_keeps_its_path() {
        let err = SchemaError::ValidationFailed {
            path: "/0/id".into(),
            message: "42 is not of type \"string\"".into(),
            error_count: 1,
        };
        assert_eq!(
            CoreError::from(err),
            CoreError::validation("/0/id", "42 is not of type \"string\"")
        );
    }

    #[test]
    fn registry_faults_are_internal() {
        let generation: CoreError = SchemaError::Generation("bad $ref".into()).into();
        assert_eq!(
            generation,
            CoreError::Internal("Schema generation error: bad $ref".into())
        );

        let missing: CoreError = SchemaError::NotFound("nope".into()).into();
        assert!(matches!(missing, CoreError::Internal(_)));
    }
}
