//! JSON builders for raw session documents.

#![allow(dead_code)]

use serde_json::{Value, json};

pub const EXERCISE: &str = "000501-thinking-traps";

pub fn at(minute: u32) -> String {
    format!("2025-05-01T10:{minute:02}:00.000Z")
}

pub fn document(catalog: &[&str], progresses: Vec<Value>) -> Value {
    let problems: Vec<Value> = catalog
        .iter()
        .map(|id| {
            json!({
                "problem_id": id,
                "progress_id": null,
                "problem_version": 1,
                "resolved_problem_id": id
            })
        })
        .collect();

    json!([{
        "id": "sess-1",
        "isComplete": 0,
        "problemSet": { "id": "ps-1", "problems": problems, "expireMinutes": null },
        "progresses": progresses
    }])
}

pub fn progress(id: &str, problem_id: &str, created_at: &str) -> Value {
    json!({
        "id": id,
        "problemId": problem_id,
        "createdAt": created_at,
        "labelPredictionBatchTestUnlocked": null,
        "axiiaChat": null,
        "submissionSnapshots": [],
        "customChats": [],
        "labelPredictionPairTests": []
    })
}

pub fn snapshot(id: &str, timestamp: &str, feedback_at: Option<&str>) -> Value {
    let feedback = feedback_at.map_or(Value::Null, |fb_at| {
        json!({
            "id": format!("fb-{id}"),
            "timestamp": fb_at,
            "snapshotId": id,
            "feedbackMemberships": []
        })
    });
    json!({
        "id": id,
        "timestamp": timestamp,
        "isValid": 1,
        "progressId": "prog",
        "textId": format!("text-{id}"),
        "text": format!("submission {id}"),
        "feedback": feedback
    })
}

pub fn chat(id: &str, created_at: &str, requests: usize) -> Value {
    let reqs: Vec<Value> = (0..requests)
        .map(|i| {
            json!({
                "id": format!("{id}-r{i}"),
                "chatId": id,
                "createdAt": created_at,
                "updatedAt": created_at,
                "input": "question",
                "output": "answer",
                "streamingId": null,
                "upstreamRequestId": null,
                "upstreamErrored": 0,
                "terminatedByUser": false
            })
        })
        .collect();
    json!({ "id": id, "createdAt": created_at, "systemPrompt": "sys", "chatRequests": reqs })
}

pub fn axiia(chat: Value) -> Value {
    json!({ "id": "ax", "chat": chat })
}

pub fn custom(title: &str, chat: Value) -> Value {
    json!({ "id": "cc", "progressId": "prog", "title": title, "sourcePresetId": null, "chat": chat })
}

pub fn prediction(id: &str, snapshot_id: &str, is_correct: bool) -> Value {
    json!({
        "id": id,
        "timestamp": at(59),
        "progressId": "prog",
        "snapshotId": snapshot_id,
        "pairId": format!("pair-{id}"),
        "upstreamRequestId": "up",
        "output": "label",
        "extractedOutput": null,
        "isCorrect": is_correct,
        "pair": {
            "id": format!("pair-{id}"),
            "problemId": EXERCISE,
            "groupName": "g",
            "name": "n",
            "version": 1,
            "input": "in",
            "output": "out"
        }
    })
}

/// A session touching three problems, one of them twice, with chats, feedback,
/// and prediction tests (including an orphan snapshot reference).
pub fn busy_document() -> Value {
    let mut intro = progress("prog-1", "p-intro", &at(1));
    intro["submissionSnapshots"] = json!([
        snapshot("s1", &at(12), Some(&at(14))),
        snapshot("s2", &at(8), None),
    ]);
    intro["axiiaChat"] = axiia(chat("c1", &at(2), 3));
    intro["customChats"] = json!([custom("Notes", chat("c2", &at(12), 1))]);

    let mut exercise = progress("prog-2", EXERCISE, &at(20));
    exercise["submissionSnapshots"] = json!([
        snapshot("s3", &at(25), Some(&at(26))),
        snapshot("s4", &at(30), None),
    ]);
    exercise["labelPredictionPairTests"] = json!([
        prediction("t1", "s3", true),
        prediction("t2", "s3", false),
        prediction("t3", "s4", true),
        prediction("t4", "missing", false),
    ]);

    let mut retry = progress("prog-3", "p-intro", &at(0));
    retry["submissionSnapshots"] = json!([snapshot("s5", &at(12), None)]);
    retry["customChats"] = json!([custom("Retry", chat("c3", &at(40), 2))]);

    let stray = progress("prog-4", "p-unlisted", &at(45));

    document(&["p-intro", EXERCISE, "p-never"], vec![intro, exercise, retry, stray])
}
