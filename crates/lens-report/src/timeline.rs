//! Global event timeline.
//!
//! Events are emitted problem by problem (submissions with their feedback,
//! then chats) and then stable-sorted by timestamp, so exact ties keep that
//! emission order.

use lens_core::report::{ProcessedChat, ProcessedSubmission, TimelineEvent};

use crate::grouping::ProblemDraft;

/// Append the events of one problem in emission order.
pub fn push_problem_events(
    problem_id: &str,
    submissions: &[ProcessedSubmission],
    chats: &[ProcessedChat],
    events: &mut Vec<TimelineEvent>,
) {
    for submission in submissions {
        events.push(TimelineEvent::Submission {
            problem_id: problem_id.to_string(),
            timestamp: submission.timestamp.clone(),
            has_feedback: submission.has_feedback,
        });

        if let Some(feedback) = &submission.feedback {
            events.push(TimelineEvent::Feedback {
                problem_id: problem_id.to_string(),
                timestamp: feedback.timestamp.clone(),
            });
        }
    }

    for chat in chats {
        events.push(TimelineEvent::Chat {
            problem_id: problem_id.to_string(),
            timestamp: chat.timestamp.clone(),
            chat_type: chat.origin.kind(),
            chat_title: chat.origin.title().map(str::to_string),
        });
    }
}

/// Build the timeline from merged drafts, in draft order.
#[must_use]
pub fn build_timeline(drafts: &[ProblemDraft<'_>]) -> Vec<TimelineEvent> {
    let mut events = Vec::new();
    for draft in drafts {
        push_problem_events(&draft.problem_id, &draft.submissions, &draft.chats, &mut events);
    }
    events.sort_by(|a, b| a.timestamp().cmp(b.timestamp()));

    tracing::debug!(events = events.len(), "built timeline");
    events
}

#[cfg(test)]
mod tests {
    use lens_core::ReportOptions;
    use lens_core::enums::{ChatKind, EventKind};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grouping::aggregate;
    use crate::test_support::builders::*;

    fn kinds(events: &[TimelineEvent]) -> Vec<(EventKind, String)> {
        events
            .iter()
            .map(|e| (e.kind(), e.problem_id().to_string()))
            .collect()
    }

    #[test]
    fn feedback_gets_its_own_event_at_its_own_time() {
        let mut p = progress("a", "p1", at(0));
        p.submission_snapshots
            .push(with_feedback(snapshot("s1", at(10), "x"), at(40)));
        p.submission_snapshots.push(snapshot("s2", at(20), "y"));
        let session = session(&["p1"], vec![p]);
        let agg = aggregate(&session, &ReportOptions::default());

        let events = build_timeline(&agg.drafts);
        let stamps: Vec<_> = events.iter().map(|e| e.timestamp().clone()).collect();
        assert_eq!(stamps, vec![at(10), at(20), at(40)]);
        assert_eq!(events[2].kind(), EventKind::Feedback);
    }

    #[test]
    fn chats_carry_origin_and_title() {
        let mut p = progress("a", "p1", at(0));
        p.axiia_chat = Some(axiia(chat("c1", at(5), &[])));
        p.custom_chats.push(custom("Scratch", chat("c2", at(3), &[])));
        let session = session(&["p1"], vec![p]);
        let agg = aggregate(&session, &ReportOptions::default());

        let events = build_timeline(&agg.drafts);
        assert_eq!(
            events[0],
            TimelineEvent::Chat {
                problem_id: "p1".into(),
                timestamp: at(3),
                chat_type: ChatKind::Custom,
                chat_title: Some("Scratch".into()),
            }
        );
        assert_eq!(
            events[1],
            TimelineEvent::Chat {
                problem_id: "p1".into(),
                timestamp: at(5),
                chat_type: ChatKind::Axiia,
                chat_title: None,
            }
        );
    }

    #[test]
    fn exact_ties_keep_problem_then_kind_order() {
        let mut first = progress("a", "p1", at(0));
        first.submission_snapshots.push(snapshot("s1", at(7), "x"));
        first.custom_chats.push(custom("t", chat("c1", at(7), &[])));
        let mut second = progress("b", "p2", at(0));
        second.submission_snapshots.push(snapshot("s2", at(7), "y"));
        let session = session(&["p1", "p2"], vec![first, second]);
        let agg = aggregate(&session, &ReportOptions::default());

        let events = build_timeline(&agg.drafts);
        assert_eq!(
            kinds(&events),
            vec![
                (EventKind::Submission, "p1".to_string()),
                (EventKind::Chat, "p1".to_string()),
                (EventKind::Submission, "p2".to_string()),
            ]
        );
    }

    #[test]
    fn ties_follow_encounter_order_not_sorted_order() {
        // s1 is emitted before s2 even though s2 is earlier, so its feedback
        // (tied with s1) sorts after s1.
        let mut p = progress("a", "p1", at(0));
        p.submission_snapshots.extend([
            snapshot("s1", at(5), "x"),
            with_feedback(snapshot("s2", at(3), "y"), at(5)),
        ]);
        let session = session(&["p1"], vec![p]);
        let agg = aggregate(&session, &ReportOptions::default());

        let events = build_timeline(&agg.drafts);
        let kinds: Vec<EventKind> = events.iter().map(TimelineEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Submission, EventKind::Submission, EventKind::Feedback]
        );
        assert_eq!(events[1].timestamp(), &at(5));
    }

    #[test]
    fn empty_drafts_give_empty_timeline() {
        assert!(build_timeline(&[]).is_empty());
    }
}
