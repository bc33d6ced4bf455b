//! Report pipeline configuration.

use lens_core::ReportOptions;
use lens_core::options::{
    DEFAULT_LABEL_PREDICTION_PROBLEM_ID, DEFAULT_PREVIEW_CHARS, DEFAULT_SNAPSHOT_NOT_FOUND,
};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_label_prediction_problem_id() -> String {
    DEFAULT_LABEL_PREDICTION_PROBLEM_ID.to_string()
}

const fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_snapshot_not_found() -> String {
    DEFAULT_SNAPSHOT_NOT_FOUND.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Problem that receives label-prediction statistics.
    /// An empty string disables them.
    #[serde(default = "default_label_prediction_problem_id")]
    pub label_prediction_problem_id: String,

    /// Characters of submission text kept in previews. Must be at least 1.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Preview used for snapshots referenced by tests but never submitted.
    #[serde(default = "default_snapshot_not_found")]
    pub snapshot_not_found: String,
}

impl ReportConfig {
    /// Convert into the options the pipeline consumes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `preview_chars` is zero.
    pub fn to_options(&self) -> Result<ReportOptions, ConfigError> {
        if self.preview_chars == 0 {
            return Err(ConfigError::InvalidValue {
                field: "report.preview_chars".into(),
                reason: "must be at least 1".into(),
            });
        }

        let problem_id = self.label_prediction_problem_id.trim();
        Ok(ReportOptions {
            label_prediction_problem_id: (!problem_id.is_empty()).then(|| problem_id.to_string()),
            preview_chars: self.preview_chars,
            snapshot_not_found: self.snapshot_not_found.clone(),
        })
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            label_prediction_problem_id: default_label_prediction_problem_id(),
            preview_chars: default_preview_chars(),
            snapshot_not_found: default_snapshot_not_found(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_pipeline_defaults() {
        let options = ReportConfig::default().to_options().unwrap();
        assert_eq!(options, ReportOptions::default());
    }

    #[test]
    fn empty_problem_id_disables_accuracy() {
        let config = ReportConfig {
            label_prediction_problem_id: "  ".into(),
            ..ReportConfig::default()
        };
        assert_eq!(config.to_options().unwrap().label_prediction_problem_id, None);
    }

    #[test]
    fn zero_preview_chars_is_rejected() {
        let config = ReportConfig {
            preview_chars: 0,
            ..ReportConfig::default()
        };
        let err = config.to_options().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "report.preview_chars"
        ));
    }
}
