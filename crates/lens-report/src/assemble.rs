//! Final report assembly: catalog ordering, session summary, and wiring of
//! the grouping, timeline, and accuracy stages.

use lens_core::ReportOptions;
use lens_core::entities::{ProblemSet, Session};
use lens_core::report::{ProcessedProblem, Report, SessionInfo};

use crate::accuracy::label_prediction_stats;
use crate::grouping::aggregate;
use crate::timeline::build_timeline;

#[must_use]
pub fn session_info(session: &Session) -> SessionInfo {
    SessionInfo {
        id: session.id.clone(),
        is_complete: session.is_complete.get(),
        total_problems: session.problem_set.problems.len(),
        problem_set_id: session.problem_set.id.clone(),
    }
}

/// Sort problems by their position in the catalog. Problems missing from the
/// catalog sort first, in their original relative order.
pub fn order_by_catalog(problems: &mut [ProcessedProblem], problem_set: &ProblemSet) {
    problems.sort_by_key(|p| problem_set.position_of(&p.problem_id));
}

/// Transform one validated session into its report.
#[must_use]
pub fn assemble(session: &Session, options: &ReportOptions) -> Report {
    let aggregation = aggregate(session, options);
    let timeline = build_timeline(&aggregation.drafts);

    let mut problems: Vec<ProcessedProblem> = aggregation
        .drafts
        .into_iter()
        .map(|draft| {
            let stats = if options.is_label_prediction_problem(&draft.problem_id) {
                label_prediction_stats(&draft.progresses, &draft.submissions, options)
            } else {
                None
            };
            draft.finish(stats)
        })
        .collect();

    for problem in &problems {
        if session.problem_set.position_of(&problem.problem_id).is_none() {
            tracing::warn!(
                problem_id = %problem.problem_id,
                problem_set = %session.problem_set.id,
                "progress references a problem missing from the problem set"
            );
        }
    }
    order_by_catalog(&mut problems, &session.problem_set);

    tracing::debug!(
        session = %session.id,
        problems = problems.len(),
        events = timeline.len(),
        "assembled report"
    );

    Report {
        session_info: session_info(session),
        problem_set: session.problem_set.clone(),
        problems,
        timeline,
        chat_stats: aggregation.chat_stats,
    }
}
