//! Answer matching for typed translations.

use crate::types::{Direction, Prompt, WordPair};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Result of checking a typed answer against the vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Every accepted translation, original spelling, without duplicates.
    pub accepted_answers: Vec<String>,
}

/// Normalize a string for comparison.
///
/// Lowercases, strips accents (combining diacritical marks after canonical
/// decomposition), turns hyphens, apostrophes and commas into spaces, and trims.
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .to_lowercase()
        .nfd()
        .filter(|c| !is_diacritic(*c))
        .map(|c| if is_separator(c) { ' ' } else { c })
        .collect();
    folded.trim().to_string()
}

fn is_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '\'' | '\u{2019}' | ',')
}

/// Collect the translations accepted for a prompt.
///
/// Any pair whose prompted side normalizes to the same string as the prompt
/// contributes its other side, so homonyms across lists are all accepted.
pub fn accepted_answers(prompt: &Prompt, vocabulary: &[WordPair]) -> Vec<String> {
    let (asked, _) = sides(&prompt.pair, prompt.direction);
    let wanted = normalize(asked);

    let mut answers: Vec<String> = Vec::new();
    for pair in vocabulary {
        let (key, answer) = sides(pair, prompt.direction);
        if normalize(key) == wanted && !answers.iter().any(|a| a == answer) {
            answers.push(answer.to_string());
        }
    }
    answers
}

/// Split a pair into (prompted side, expected side).
fn sides(pair: &WordPair, direction: Direction) -> (&str, &str) {
    match direction {
        Direction::SourceToTarget => (pair.source.as_str(), pair.target.as_str()),
        Direction::TargetToSource => (pair.target.as_str(), pair.source.as_str()),
    }
}

/// Check a typed answer for the current prompt.
pub fn check_answer(typed: &str, prompt: &Prompt, vocabulary: &[WordPair]) -> MatchResult {
    let accepted = accepted_answers(prompt, vocabulary);
    let typed = normalize(typed);
    let is_correct = accepted.iter().any(|a| normalize(a) == typed);

    MatchResult {
        is_correct,
        accepted_answers: accepted,
    }
}
