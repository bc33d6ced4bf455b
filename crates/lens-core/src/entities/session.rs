use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::flag::Flag;
use crate::timestamp::Timestamp;

use super::chat::{AxiiaChat, CustomChat};
use super::prediction::LabelPredictionPairTest;
use super::submission::SubmissionSnapshot;

/// The root document: an array of sessions. Only the first one is reported on.
pub type SessionData = Vec<Session>;

/// One complete user activity record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub is_complete: Flag,
    pub problem_set: ProblemSet,
    pub progresses: Vec<Progress>,
}

/// The catalog of problems a session was run against. The order of `problems`
/// is the canonical display order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSet {
    pub id: String,
    pub problems: Vec<ProblemSetItem>,
    pub expire_minutes: Option<Number>,
}

impl ProblemSet {
    /// Index of the first catalog entry for `problem_id`.
    #[must_use]
    pub fn position_of(&self, problem_id: &str) -> Option<usize> {
        self.problems.iter().position(|p| p.problem_id == problem_id)
    }

    /// First catalog entry for `problem_id`.
    #[must_use]
    pub fn item(&self, problem_id: &str) -> Option<&ProblemSetItem> {
        self.problems.iter().find(|p| p.problem_id == problem_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProblemSetItem {
    pub problem_id: String,
    pub progress_id: Option<String>,
    pub problem_version: Number,
    /// Canonical id after redirection/versioning.
    pub resolved_problem_id: String,
}

/// Work record for one problem. A problem may have several (retries).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub id: String,
    pub problem_id: String,
    pub created_at: Timestamp,
    pub label_prediction_batch_test_unlocked: Option<bool>,
    pub axiia_chat: Option<AxiiaChat>,
    pub submission_snapshots: Vec<SubmissionSnapshot>,
    pub custom_chats: Vec<CustomChat>,
    pub label_prediction_pair_tests: Vec<LabelPredictionPairTest>,
}

impl Progress {
    /// Number of chats (system-initiated plus user-initiated) on this record.
    #[must_use]
    pub fn chat_count(&self) -> usize {
        usize::from(self.axiia_chat.is_some()) + self.custom_chats.len()
    }
}
