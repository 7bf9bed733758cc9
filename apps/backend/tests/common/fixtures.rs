//! Test fixtures and factory functions for creating test data.

#![allow(dead_code)]

use serde_json::{json, Value};
use vocab_core::VocabSource;

/// Word lists written into the test vocabulary directory.
pub const VOCAB_FILES: &[(&str, &str)] = &[
    ("s1.txt", "[animals] cat: chat\ndog: chien\n"),
    ("s2.txt", "bird: oiseau\n\nnot a pair\n"),
    ("extra/s3.txt", "fish: poisson\n"),
];

/// Every pair in `VOCAB_FILES`, in load order.
pub const PAIRS: &[(&str, &str)] = &[
    ("cat", "chat"),
    ("dog", "chien"),
    ("bird", "oiseau"),
    ("fish", "poisson"),
];

/// Catalog matching `VOCAB_FILES`.
pub fn sources() -> Vec<VocabSource> {
    vec![
        VocabSource::new("s1", "Semester 1", "s1.txt"),
        VocabSource::new("s2", "Semester 2", "s2.txt"),
        VocabSource::new("s3", "Semester 3", "extra/s3.txt"),
    ]
}

/// Catalog with one source whose file does not exist.
pub fn sources_with_missing() -> Vec<VocabSource> {
    let mut sources = sources();
    sources.insert(1, VocabSource::new("gone", "Missing list", "gone.txt"));
    sources
}

/// The expected answer for the prompt in a session view.
pub fn right_answer(view: &Value) -> String {
    let prompt = &view["prompt"];
    let text = prompt["text"].as_str().expect("no prompt on display");
    let pair = PAIRS
        .iter()
        .find(|(source, target)| *source == text || *target == text)
        .expect("prompt not in fixtures");

    match prompt["direction"].as_str() {
        Some("source_to_target") => pair.1.to_string(),
        _ => pair.0.to_string(),
    }
}

/// Create a submit answer request body.
pub fn answer_request(answer: &str) -> Value {
    json!({ "answer": answer })
}

/// Create an enable/disable request body.
pub fn enabled_request(enabled: bool) -> Value {
    json!({ "enabled": enabled })
}
