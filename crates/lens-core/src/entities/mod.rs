//! Entity structs for the raw session log.
//!
//! The JSON export nests `Session -> Progress -> {chats, submission snapshots,
//! label-prediction tests}`. Field names follow the export exactly: camelCase
//! everywhere except `ProblemSetItem`, which is snake_case.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`; the schema
//! registry in `lens-schema` validates raw documents against these shapes
//! before they are decoded.

mod chat;
mod prediction;
mod session;
mod submission;

pub use chat::{AxiiaChat, Chat, ChatRequest, CustomChat};
pub use prediction::{LabelPredictionPair, LabelPredictionPairTest};
pub use session::{ProblemSet, ProblemSetItem, Progress, Session, SessionData};
pub use submission::{Feedback, FeedbackMembership, FeedbackRun, SubmissionSnapshot};
