use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::timestamp::Timestamp;

/// A labeled fixture: canonical input and expected output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelPredictionPair {
    pub id: String,
    pub problem_id: String,
    pub group_name: String,
    pub name: String,
    pub version: Number,
    pub input: String,
    pub output: String,
}

/// One automated check of a prediction against a fixture, evaluated against
/// the submission snapshot named by `snapshot_id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LabelPredictionPairTest {
    pub id: String,
    pub timestamp: Timestamp,
    pub progress_id: String,
    pub snapshot_id: String,
    pub pair_id: String,
    pub upstream_request_id: String,
    pub output: String,
    pub extracted_output: Option<String>,
    pub is_correct: bool,
    pub pair: LabelPredictionPair,
}
