use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flag::Flag;
use crate::timestamp::Timestamp;

/// Shared shape of system-initiated and user-initiated chats.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub created_at: Timestamp,
    pub system_prompt: String,
    pub chat_requests: Vec<ChatRequest>,
}

impl Chat {
    /// Total characters sent across all requests.
    #[must_use]
    pub fn input_length(&self) -> usize {
        self.chat_requests.iter().map(|r| r.input.chars().count()).sum()
    }

    /// Total characters received across all requests.
    #[must_use]
    pub fn output_length(&self) -> usize {
        self.chat_requests
            .iter()
            .map(|r| r.output.chars().count())
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub id: String,
    pub chat_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub input: String,
    pub output: String,
    pub streaming_id: Option<String>,
    pub upstream_request_id: Option<String>,
    pub upstream_errored: Flag,
    pub terminated_by_user: Flag,
}

/// The system-initiated chat attached to a progress record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AxiiaChat {
    pub id: String,
    pub chat: Chat,
}

/// A user-initiated chat.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomChat {
    pub id: String,
    pub progress_id: String,
    pub title: String,
    pub source_preset_id: Option<String>,
    pub chat: Chat,
}
