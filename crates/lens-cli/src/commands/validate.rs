use std::path::Path;

use lens_core::entities::SessionData;
use lens_schema::{SchemaError, SchemaRegistry, SessionValidator};
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::loader::read_document;
use crate::output;

/// Outcome of `lens validate`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progresses: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationSummary {
    fn passed(sessions: &SessionData) -> Self {
        Self {
            valid: true,
            sessions: Some(sessions.len()),
            progresses: sessions.first().map(|s| s.progresses.len()),
            path: None,
            message: None,
        }
    }

    fn failed(path: String, message: String) -> Self {
        Self {
            valid: false,
            sessions: None,
            progresses: None,
            path: Some(path),
            message: Some(message),
        }
    }
}

/// Check `document` and summarise the outcome.
pub fn summarize(document: &Value) -> anyhow::Result<ValidationSummary> {
    let validator = SessionValidator::new(&SchemaRegistry::new())?;
    match validator.validate(document) {
        Ok(sessions) => Ok(ValidationSummary::passed(&sessions)),
        Err(SchemaError::ValidationFailed { path, message, .. }) => {
            Ok(ValidationSummary::failed(path, message))
        }
        Err(other) => Err(other.into()),
    }
}

/// Handle `lens validate`.
pub fn handle(args: &ValidateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = read_document(Path::new(&args.file))?;
    let summary = summarize(&document)?;
    output::output(&summary, flags.format, true)?;

    if let Some(path) = &summary.path {
        anyhow::bail!("{} failed validation at '{path}'", args.file);
    }
    Ok(())
}
