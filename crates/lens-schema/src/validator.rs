//! Shape validation and typed decoding of a raw session document.

use std::fmt::Write;

use lens_core::entities::SessionData;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};

use crate::error::SchemaError;
use crate::registry::{SESSION_DATA, SchemaRegistry, check};

/// Compiled validator for the `session_data` schema.
///
/// Build once and reuse; validation itself is pure over its input.
pub struct SessionValidator {
    validator: jsonschema::Validator,
}

impl SessionValidator {
    /// Compile the session schema from `registry`.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Generation` if the schema does not compile.
    pub fn new(registry: &SchemaRegistry) -> Result<Self, SchemaError> {
        Ok(Self {
            validator: registry.compile(SESSION_DATA)?,
        })
    }

    /// Check shape/type conformance without decoding.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` naming the first offending path.
    pub fn check(&self, raw: &Value) -> Result<(), SchemaError> {
        check(&self.validator, raw)
    }

    /// Validate `raw` and decode it into typed sessions, normalizing
    /// dual-encoded booleans on the way.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::ValidationFailed` for the first structural
    /// violation. A value that passes the schema but still fails to decode is
    /// reported at the path where decoding stopped.
    pub fn validate(&self, raw: &Value) -> Result<SessionData, SchemaError> {
        self.check(raw)?;
        decode(raw)
    }
}

/// Typed decode that remembers where it failed.
fn decode(raw: &Value) -> Result<SessionData, SchemaError> {
    serde_path_to_error::deserialize(raw).map_err(|e| SchemaError::ValidationFailed {
        path: json_pointer(e.path()),
        message: e.inner().to_string(),
        error_count: 1,
    })
}

/// Render a decode path as a JSON pointer (`/0/problemSet/id`).
fn json_pointer(path: &Path) -> String {
    let mut pointer = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => {
                let _ = write!(pointer, "/{index}");
            }
            Segment::Map { key } => {
                let _ = write!(pointer, "/{}", key.replace('~', "~0").replace('/', "~1"));
            }
            _ => {}
        }
    }
    pointer
}

/// One-shot validation with a freshly built registry.
///
/// # Errors
///
/// See [`SessionValidator::validate`].
pub fn validate_session_data(raw: &Value) -> Result<SessionData, SchemaError> {
    SessionValidator::new(&SchemaRegistry::new())?.validate(raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_failure_names_the_field() {
        let raw = json!([{
            "id": "sess-1",
            "isComplete": true,
            "problemSet": {
                "id": "ps-1",
                "problems": [{
                    "problem_id": "p1",
                    "progress_id": null,
                    "problem_version": "one",
                    "resolved_problem_id": "p1"
                }],
                "expireMinutes": null
            },
            "progresses": []
        }]);

        match decode(&raw) {
            Err(SchemaError::ValidationFailed { path, .. }) => {
                assert_eq!(path, "/0/problemSet/problems/0/problem_version");
            }
            other => panic!("expected a decode failure, got {other:?}"),
        }
    }

    #[test]
    fn decode_failure_at_root() {
        match decode(&json!({ "id": "sess-1" })) {
            Err(SchemaError::ValidationFailed { path, .. }) => assert_eq!(path, ""),
            other => panic!("expected a decode failure, got {other:?}"),
        }
    }
}
