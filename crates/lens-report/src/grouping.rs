//! Grouping of progress records by problem and merging of their submissions
//! and chats.
//!
//! The output of this stage is one [`ProblemDraft`] per distinct problem id
//! seen in the progress list, in first-seen order. Drafts keep submissions and
//! chats in encounter order; the timeline is built from that order before
//! [`ProblemDraft::finish`] sorts them.

use std::collections::HashMap;

use lens_core::ReportOptions;
use lens_core::entities::{Chat, ProblemSetItem, Progress, Session};
use lens_core::report::{
    ChatOrigin, ChatStats, FeedbackSummary, LabelPredictionStats, ProcessedChat, ProcessedProblem,
    ProcessedSubmission,
};
use lens_core::timestamp::Timestamp;

/// Progress records of one problem, in input order.
#[derive(Debug)]
pub struct ProgressGroup<'a> {
    pub problem_id: &'a str,
    pub progresses: Vec<&'a Progress>,
}

/// Group progress records by problem id, preserving first-seen order of
/// problems and input order of records within a problem.
#[must_use]
pub fn group_by_problem(progresses: &[Progress]) -> Vec<ProgressGroup<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ProgressGroup<'_>> = Vec::new();

    for progress in progresses {
        let slot = *index.entry(progress.problem_id.as_str()).or_insert_with(|| {
            groups.push(ProgressGroup {
                problem_id: progress.problem_id.as_str(),
                progresses: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].progresses.push(progress);
    }

    groups
}

/// Earliest creation time; the first of several equal minima wins.
#[must_use]
pub fn earliest_created_at(progresses: &[&Progress]) -> Option<Timestamp> {
    progresses
        .iter()
        .copied()
        .reduce(|earliest, p| {
            if p.created_at < earliest.created_at {
                p
            } else {
                earliest
            }
        })
        .map(|p| p.created_at.clone())
}

/// Flatten every snapshot of every record into one list, in encounter order.
#[must_use]
pub fn merge_submissions(
    progresses: &[&Progress],
    options: &ReportOptions,
) -> Vec<ProcessedSubmission> {
    progresses
        .iter()
        .flat_map(|p| &p.submission_snapshots)
        .map(|snap| ProcessedSubmission {
            id: snap.id.clone(),
            timestamp: snap.timestamp.clone(),
            is_valid: snap.is_valid.get(),
            has_feedback: snap.feedback.is_some(),
            text: snap.text.clone(),
            text_id: snap.text_id.clone(),
            feedback: snap.feedback.clone(),
            text_preview: options.preview(&snap.text),
        })
        .collect()
}

/// Flatten the system chat and all user chats of every record, in encounter
/// order (per record: system chat first), counting them into `stats`.
pub fn merge_chats(progresses: &[&Progress], stats: &mut ChatStats) -> Vec<ProcessedChat> {
    let mut chats = Vec::new();

    for progress in progresses {
        if let Some(axiia) = &progress.axiia_chat {
            stats.axiia_chats += 1;
            stats.total_requests += axiia.chat.chat_requests.len();
            chats.push(processed_chat(ChatOrigin::Axiia, &axiia.chat));
        }

        for custom in &progress.custom_chats {
            stats.custom_chats += 1;
            stats.total_requests += custom.chat.chat_requests.len();
            chats.push(processed_chat(
                ChatOrigin::Custom {
                    title: custom.title.clone(),
                },
                &custom.chat,
            ));
        }
    }

    stats.total_chats += chats.len();
    chats
}

fn processed_chat(origin: ChatOrigin, chat: &Chat) -> ProcessedChat {
    ProcessedChat {
        origin,
        timestamp: chat.created_at.clone(),
        input_length: chat.input_length(),
        output_length: chat.output_length(),
        system_prompt: chat.system_prompt.clone(),
        requests: chat.chat_requests.clone(),
    }
}

/// A problem whose records have been merged but not yet sorted.
#[derive(Debug)]
pub struct ProblemDraft<'a> {
    pub problem_id: String,
    pub meta: Option<&'a ProblemSetItem>,
    pub created_at: Timestamp,
    pub progresses: Vec<&'a Progress>,
    pub submissions: Vec<ProcessedSubmission>,
    pub chats: Vec<ProcessedChat>,
}

impl ProblemDraft<'_> {
    /// Sort submissions and chats by timestamp (stable) and attach the
    /// optional statistics and first-feedback summary.
    #[must_use]
    pub fn finish(self, label_prediction_stats: Option<LabelPredictionStats>) -> ProcessedProblem {
        let Self {
            problem_id,
            meta,
            created_at,
            mut submissions,
            mut chats,
            ..
        } = self;

        submissions.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        chats.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

        let feedback_received = submissions
            .iter()
            .find_map(|s| s.feedback.as_ref())
            .map(|feedback| FeedbackSummary {
                timestamp: feedback.timestamp.clone(),
                feedback_text: String::new(),
            });

        ProcessedProblem {
            problem_id,
            problem_version: meta.map(|m| m.problem_version.clone()),
            resolved_problem_id: meta.map(|m| m.resolved_problem_id.clone()),
            created_at,
            submissions,
            chats,
            label_prediction_stats,
            feedback_received,
        }
    }
}

/// Drafts for every problem with at least one progress record, plus chat
/// counters accumulated while merging.
#[derive(Debug)]
pub struct Aggregation<'a> {
    pub drafts: Vec<ProblemDraft<'a>>,
    pub chat_stats: ChatStats,
}

/// Group and merge one session's progress records.
///
/// Catalog entries with no progress produce no draft.
#[must_use]
pub fn aggregate<'a>(session: &'a Session, options: &ReportOptions) -> Aggregation<'a> {
    let mut chat_stats = ChatStats::default();
    let mut drafts = Vec::new();

    for group in group_by_problem(&session.progresses) {
        let Some(created_at) = earliest_created_at(&group.progresses) else {
            continue;
        };

        let submissions = merge_submissions(&group.progresses, options);
        let chats = merge_chats(&group.progresses, &mut chat_stats);

        drafts.push(ProblemDraft {
            problem_id: group.problem_id.to_string(),
            meta: session.problem_set.item(group.problem_id),
            created_at,
            progresses: group.progresses,
            submissions,
            chats,
        });
    }

    tracing::debug!(
        problems = drafts.len(),
        chats = chat_stats.total_chats,
        requests = chat_stats.total_requests,
        "merged progress records"
    );

    Aggregation { drafts, chat_stats }
}
