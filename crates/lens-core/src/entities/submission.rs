use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::flag::Flag;
use crate::timestamp::Timestamp;

/// One timestamped version of the user's submitted text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSnapshot {
    pub id: String,
    pub timestamp: Timestamp,
    pub is_valid: Flag,
    pub progress_id: String,
    pub text_id: String,
    pub text: String,
    pub feedback: Option<Feedback>,
}

/// Evaluator output attached to a snapshot; bundles one or more runs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub timestamp: Timestamp,
    pub snapshot_id: String,
    pub feedback_memberships: Vec<FeedbackMembership>,
}

impl Feedback {
    /// Decode the `extractedFields` payload of every run, in membership order.
    ///
    /// # Errors
    ///
    /// Returns the first JSON decode error encountered.
    pub fn parsed_extracted_fields(&self) -> Result<Vec<serde_json::Value>, serde_json::Error> {
        self.feedback_memberships
            .iter()
            .map(|m| m.run.extracted_fields_value())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackMembership {
    pub id: Number,
    pub run_id: String,
    pub feedback_id: String,
    pub run: FeedbackRun,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRun {
    pub id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub problem_id: String,
    pub problem_version: Number,
    pub submission_text_id: String,
    pub output: String,
    pub task_observation_id: Option<String>,
    pub upstream_request_id: String,
    pub upstream_errored: Flag,
    pub terminated_by_user: Flag,
    /// JSON object encoded as a string.
    pub extracted_fields: String,
    pub rendered_result: String,
}

impl FeedbackRun {
    /// Decode `extracted_fields`.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload is not valid JSON.
    pub fn extracted_fields_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.extracted_fields)
    }
}
