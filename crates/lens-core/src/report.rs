//! Report types produced by the pipeline.
//!
//! None of these appear in the input; each one is derived from exactly one
//! validated source record (or aggregates over records of one problem).
//! JSON field names are camelCase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::entities::{ChatRequest, Feedback, ProblemSet};
use crate::enums::{ChatKind, EventKind};
use crate::timestamp::{Timestamp, empty_as_none};

/// The complete flattened view of one session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub session_info: SessionInfo,
    pub problem_set: ProblemSet,
    pub problems: Vec<ProcessedProblem>,
    pub timeline: Vec<TimelineEvent>,
    pub chat_stats: ChatStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    pub is_complete: bool,
    /// Declared catalog size, not the number of problems with progress.
    pub total_problems: usize,
    pub problem_set_id: String,
}

/// All progress for one problem id, merged across progress records.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedProblem {
    pub problem_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_version: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_problem_id: Option<String>,
    /// Earliest `createdAt` among the merged progress records.
    pub created_at: Timestamp,
    pub submissions: Vec<ProcessedSubmission>,
    pub chats: Vec<ProcessedChat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_prediction_stats: Option<LabelPredictionStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_received: Option<FeedbackSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedSubmission {
    pub id: String,
    pub timestamp: Timestamp,
    pub is_valid: bool,
    pub has_feedback: bool,
    pub text: String,
    pub text_id: String,
    pub feedback: Option<Feedback>,
    pub text_preview: String,
}

/// Origin of a chat, written as the `type` discriminant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChatOrigin {
    Axiia,
    Custom { title: String },
}

impl ChatOrigin {
    #[must_use]
    pub const fn kind(&self) -> ChatKind {
        match self {
            Self::Axiia => ChatKind::Axiia,
            Self::Custom { .. } => ChatKind::Custom,
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Axiia => None,
            Self::Custom { title } => Some(title),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedChat {
    #[serde(flatten)]
    pub origin: ChatOrigin,
    pub timestamp: Timestamp,
    pub input_length: usize,
    pub output_length: usize,
    pub system_prompt: String,
    pub requests: Vec<ChatRequest>,
}

/// Convenience pointer at the first feedback a problem received. The text is
/// left blank; the full feedback lives on the submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub timestamp: Timestamp,
    pub feedback_text: String,
}

/// One entry of the global timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimelineEvent {
    #[serde(rename_all = "camelCase")]
    Submission {
        problem_id: String,
        timestamp: Timestamp,
        has_feedback: bool,
    },
    #[serde(rename_all = "camelCase")]
    Chat {
        problem_id: String,
        timestamp: Timestamp,
        chat_type: ChatKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        chat_title: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Feedback {
        problem_id: String,
        timestamp: Timestamp,
    },
}

impl TimelineEvent {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Submission { .. } => EventKind::Submission,
            Self::Chat { .. } => EventKind::Chat,
            Self::Feedback { .. } => EventKind::Feedback,
        }
    }

    #[must_use]
    pub fn problem_id(&self) -> &str {
        match self {
            Self::Submission { problem_id, .. }
            | Self::Chat { problem_id, .. }
            | Self::Feedback { problem_id, .. } => problem_id,
        }
    }

    #[must_use]
    pub const fn timestamp(&self) -> &Timestamp {
        match self {
            Self::Submission { timestamp, .. }
            | Self::Chat { timestamp, .. }
            | Self::Feedback { timestamp, .. } => timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatStats {
    pub total_chats: usize,
    pub total_requests: usize,
    pub axiia_chats: usize,
    pub custom_chats: usize,
}

/// Correctness of the tests evaluated against one submission snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotAccuracy {
    pub snapshot_id: String,
    /// Empty when the snapshot is not among the problem's submissions.
    #[serde(with = "empty_as_none")]
    #[schemars(with = "String")]
    pub timestamp: Option<Timestamp>,
    pub text_preview: String,
    pub total_tests: usize,
    pub correct_tests: usize,
    /// Percentage in `[0, 100]`.
    pub accuracy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelPredictionStats {
    pub total_tests: usize,
    pub correct_tests: usize,
    /// Percentage in `[0, 100]`.
    pub accuracy: f64,
    pub by_snapshot: Vec<SnapshotAccuracy>,
}
