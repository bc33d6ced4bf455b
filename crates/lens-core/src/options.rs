//! Pipeline options.
//!
//! The pipeline never reads configuration on its own; callers build a
//! `ReportOptions` (usually from `lens-config`) and pass it in.

use serde::{Deserialize, Serialize};

/// Problem id of the label-prediction exercise in the current problem catalog.
pub const DEFAULT_LABEL_PREDICTION_PROBLEM_ID: &str = "000501-thinking-traps";

/// Characters of submission text kept in a preview.
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

/// Preview shown for a snapshot that tests reference but no submission carries.
pub const DEFAULT_SNAPSHOT_NOT_FOUND: &str = "Snapshot not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Problem that receives label-prediction statistics. `None` disables them.
    pub label_prediction_problem_id: Option<String>,
    pub preview_chars: usize,
    pub snapshot_not_found: String,
}

impl ReportOptions {
    /// Whether `problem_id` is the designated label-prediction exercise.
    #[must_use]
    pub fn is_label_prediction_problem(&self, problem_id: &str) -> bool {
        self.label_prediction_problem_id.as_deref() == Some(problem_id)
    }

    /// First `preview_chars` characters of `text`, with `...` appended when cut.
    #[must_use]
    pub fn preview(&self, text: &str) -> String {
        match text.char_indices().nth(self.preview_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        }
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            label_prediction_problem_id: Some(DEFAULT_LABEL_PREDICTION_PROBLEM_ID.to_string()),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            snapshot_not_found: DEFAULT_SNAPSHOT_NOT_FOUND.to_string(),
        }
    }
}
