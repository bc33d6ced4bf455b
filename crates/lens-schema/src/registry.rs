//! Central schema registry for Lens.
//!
//! The `SchemaRegistry` builds JSON Schemas from lens-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Registry name of the raw input document (an array of sessions).
pub const SESSION_DATA: &str = "session_data";

/// Registry name of the pipeline output.
pub const REPORT: &str = "report";

/// Store of every JSON Schema Lens knows about.
///
/// Input schemas (`session_data`, `session`, `progress`) are strict: every
/// declared property is required. Output schemas are left as generated.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

/// Insert a schema into the map. `$strict` input schemas get every declared
/// property marked as required.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty, strict) => {{
        let mut schema = schema_for!($ty).to_value();
        require_declared_properties(&mut schema);
        $map.insert($name, schema);
    }};
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    /// Build a registry with the input and report schemas from lens-core.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Input document (3) ---
        register!(
            schemas,
            SESSION_DATA,
            lens_core::entities::SessionData,
            strict
        );
        register!(schemas, "session", lens_core::entities::Session, strict);
        register!(schemas, "progress", lens_core::entities::Progress, strict);

        // --- Report (2) ---
        register!(schemas, REPORT, lens_core::report::Report);
        register!(
            schemas,
            "timeline_event",
            lens_core::report::TimelineEvent
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Compile a named schema into a reusable validator. Formats
    /// (`date-time`) are asserted, not just annotated.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` for an unknown name and
    /// `SchemaError::Generation` if the schema fails to compile.
    pub fn compile(&self, name: &str) -> Result<jsonschema::Validator, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        jsonschema::options()
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` naming the first offending path.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let validator = self.compile(name)?;
        check(&validator, instance)
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a compiled validator and fold its errors into a single `SchemaError`.
pub(crate) fn check(validator: &jsonschema::Validator, instance: &Value) -> Result<(), SchemaError> {
    let mut first = None;
    let mut error_count = 0usize;

    for error in validator.iter_errors(instance) {
        error_count += 1;
        if first.is_none() {
            let mut path = error.instance_path.to_string();
            if let jsonschema::error::ValidationErrorKind::Required { property } = &error.kind {
                if let Some(name) = property.as_str() {
                    path.push('/');
                    path.push_str(name);
                }
            }
            first = Some((path, error.to_string()));
        }
    }

    match first {
        None => Ok(()),
        Some((path, message)) => Err(SchemaError::ValidationFailed {
            path,
            message,
            error_count,
        }),
    }
}

/// Mark every declared property of every object schema as required.
///
/// `schemars` leaves `Option<T>` fields out of `required`; the session export
/// always writes nullable keys, so a missing key is a shape error.
fn require_declared_properties(schema: &mut Value) {
    match schema {
        Value::Object(map) => {
            if let Some(Value::Object(properties)) = map.get("properties") {
                let names: Vec<Value> = properties.keys().cloned().map(Value::String).collect();
                map.insert("required".to_string(), Value::Array(names));
            }
            for child in map.values_mut() {
                require_declared_properties(child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(require_declared_properties),
        _ => {}
    }
}
