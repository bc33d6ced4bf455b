//! Label-prediction accuracy for the designated exercise problem.
//!
//! Tests are grouped by the snapshot they were evaluated against. Each group
//! gets a correctness percentage; the aggregate is computed over all tests.
//! A problem with no tests gets no statistics at all, which keeps "never
//! attempted" distinct from "0% correct".

use std::collections::HashMap;

use lens_core::ReportOptions;
use lens_core::entities::{LabelPredictionPairTest, Progress};
use lens_core::report::{LabelPredictionStats, ProcessedSubmission, SnapshotAccuracy};

/// `correct / total` as a percentage, or `None` when there is nothing to
/// divide by.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(correct: usize, total: usize) -> Option<f64> {
    (total > 0).then(|| (correct as f64 / total as f64) * 100.0)
}

/// Tests referencing one snapshot, in input order.
struct SnapshotGroup<'a> {
    snapshot_id: &'a str,
    tests: Vec<&'a LabelPredictionPairTest>,
}

impl SnapshotGroup<'_> {
    fn correct(&self) -> usize {
        self.tests.iter().filter(|t| t.is_correct).count()
    }
}

fn group_by_snapshot<'a>(progresses: &[&'a Progress]) -> Vec<SnapshotGroup<'a>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<SnapshotGroup<'a>> = Vec::new();

    for test in progresses.iter().flat_map(|p| &p.label_prediction_pair_tests) {
        let slot = *index.entry(test.snapshot_id.as_str()).or_insert_with(|| {
            groups.push(SnapshotGroup {
                snapshot_id: test.snapshot_id.as_str(),
                tests: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].tests.push(test);
    }

    groups
}

/// Compute accuracy statistics from the tests attached to `progresses`.
///
/// `submissions` is the problem's merged submission list; each snapshot's
/// timestamp and preview are looked up there by id. A snapshot that no
/// submission carries gets an empty timestamp and the configured
/// "not found" preview.
#[must_use]
pub fn label_prediction_stats(
    progresses: &[&Progress],
    submissions: &[ProcessedSubmission],
    options: &ReportOptions,
) -> Option<LabelPredictionStats> {
    let groups = group_by_snapshot(progresses);

    let total_tests: usize = groups.iter().map(|g| g.tests.len()).sum();
    let correct_tests: usize = groups.iter().map(SnapshotGroup::correct).sum();
    let accuracy = percentage(correct_tests, total_tests)?;

    let mut by_snapshot = Vec::with_capacity(groups.len());
    for group in &groups {
        let correct = group.correct();
        let Some(snapshot_accuracy) = percentage(correct, group.tests.len()) else {
            continue;
        };

        let submission = submissions.iter().find(|s| s.id == group.snapshot_id);
        if submission.is_none() {
            tracing::warn!(
                snapshot_id = group.snapshot_id,
                tests = group.tests.len(),
                "label-prediction tests reference an unknown snapshot"
            );
        }

        by_snapshot.push(SnapshotAccuracy {
            snapshot_id: group.snapshot_id.to_string(),
            timestamp: submission.map(|s| s.timestamp.clone()),
            text_preview: submission.map_or_else(
                || options.snapshot_not_found.clone(),
                |s| s.text_preview.clone(),
            ),
            total_tests: group.tests.len(),
            correct_tests: correct,
            accuracy: snapshot_accuracy,
        });
    }

    // `None` (unknown snapshot) sorts before every real timestamp.
    by_snapshot.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));

    tracing::debug!(
        total_tests,
        correct_tests,
        snapshots = by_snapshot.len(),
        "computed label-prediction accuracy"
    );

    Some(LabelPredictionStats {
        total_tests,
        correct_tests,
        accuracy,
        by_snapshot,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::grouping::merge_submissions;
    use crate::test_support::builders::*;

    #[test]
    fn percentage_guards_empty_groups() {
        assert_eq!(percentage(0, 0), None);
        assert_eq!(percentage(3, 4), Some(75.0));
        assert_eq!(percentage(0, 5), Some(0.0));
        assert_eq!(percentage(5, 5), Some(100.0));
    }

    #[test]
    fn no_tests_means_no_statistics() {
        let p = progress("a", "p", at(0));
        assert!(label_prediction_stats(&[&p], &[], &ReportOptions::default()).is_none());
    }

    #[test]
    fn all_wrong_is_zero_not_absent() {
        let mut p = progress("a", "p", at(0));
        p.submission_snapshots.push(snapshot("s1", at(1), "x"));
        p.label_prediction_pair_tests
            .extend([prediction("t1", "s1", false), prediction("t2", "s1", false)]);
        let subs = merge_submissions(&[&p], &ReportOptions::default());

        let stats = label_prediction_stats(&[&p], &subs, &ReportOptions::default()).unwrap();
        assert_eq!(stats.total_tests, 2);
        assert_eq!(stats.accuracy, 0.0);
    }

    #[test]
    fn per_snapshot_and_overall_ratios() {
        let mut p = progress("a", "p", at(0));
        p.submission_snapshots
            .extend([snapshot("x", at(10), "first"), snapshot("y", at(20), "second")]);
        // x: 3 of 4, y: 3 of 6, interleaved
        for (i, (snap, ok)) in [
            ("y", true),
            ("x", true),
            ("y", false),
            ("x", true),
            ("y", true),
            ("x", false),
            ("y", false),
            ("x", true),
            ("y", true),
            ("y", false),
        ]
        .into_iter()
        .enumerate()
        {
            p.label_prediction_pair_tests
                .push(prediction(&format!("t{i}"), snap, ok));
        }
        let subs = merge_submissions(&[&p], &ReportOptions::default());

        let stats = label_prediction_stats(&[&p], &subs, &ReportOptions::default()).unwrap();
        assert_eq!(stats.total_tests, 10);
        assert_eq!(stats.correct_tests, 6);
        assert_eq!(stats.accuracy, 60.0);

        let ids: Vec<&str> = stats.by_snapshot.iter().map(|s| s.snapshot_id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y"]);
        assert_eq!(stats.by_snapshot[0].accuracy, 75.0);
        assert_eq!(stats.by_snapshot[1].accuracy, 50.0);
        assert_eq!(stats.by_snapshot[0].text_preview, "first");
    }

    #[test]
    fn orphan_snapshot_uses_sentinels_and_sorts_first() {
        let mut p = progress("a", "p", at(0));
        p.submission_snapshots.push(snapshot("known", at(10), "text"));
        p.label_prediction_pair_tests
            .extend([prediction("t1", "known", true), prediction("t2", "ghost", true)]);
        let subs = merge_submissions(&[&p], &ReportOptions::default());

        let stats = label_prediction_stats(&[&p], &subs, &ReportOptions::default()).unwrap();
        let ghost = &stats.by_snapshot[0];
        assert_eq!(ghost.snapshot_id, "ghost");
        assert!(ghost.timestamp.is_none());
        assert_eq!(ghost.text_preview, "Snapshot not found");
        assert_eq!(stats.by_snapshot[1].snapshot_id, "known");
    }

    #[test]
    fn tests_from_every_record_are_pooled() {
        let mut a = progress("a", "p", at(0));
        a.label_prediction_pair_tests.push(prediction("t1", "s", true));
        let mut b = progress("b", "p", at(1));
        b.label_prediction_pair_tests.push(prediction("t2", "s", false));

        let stats = label_prediction_stats(&[&a, &b], &[], &ReportOptions::default()).unwrap();
        assert_eq!(stats.by_snapshot.len(), 1);
        assert_eq!(stats.by_snapshot[0].total_tests, 2);
        assert_eq!(stats.accuracy, 50.0);
    }
}
