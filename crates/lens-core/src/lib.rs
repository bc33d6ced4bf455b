//! # lens-core
//!
//! Core types shared by every Lens crate.
//!
//! This crate provides:
//! - Entity structs for the raw session log (sessions, progresses, chats,
//!   submission snapshots, feedback, label-prediction tests)
//! - `Flag`, the canonical form of booleans that arrive as `true`/`false` or `1`/`0`
//! - `Timestamp`, an RFC 3339 instant that keeps its original text
//! - Report types produced by the pipeline (`Report`, `ProcessedProblem`, `TimelineEvent`, ...)
//! - `ReportOptions`, the only knobs the pipeline accepts
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod flag;
pub mod options;
pub mod report;
pub mod timestamp;

pub use errors::CoreError;
pub use flag::Flag;
pub use options::ReportOptions;
pub use timestamp::Timestamp;
