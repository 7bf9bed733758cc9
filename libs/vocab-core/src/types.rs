//! Core types for the vocabulary drill.

use serde::{Deserialize, Serialize};

/// A translation pair read from one vocabulary line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub source: String,
    pub target: String,
}

impl WordPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Which side of a pair is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    SourceToTarget,
    TargetToSource,
}

impl Direction {
    /// Instruction shown above the prompt.
    pub fn label(self) -> &'static str {
        match self {
            Self::SourceToTarget => "Translate into French:",
            Self::TargetToSource => "Translate into English:",
        }
    }
}

/// The question currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub pair: WordPair,
    pub direction: Direction,
}

impl Prompt {
    /// The term the user has to translate.
    pub fn text(&self) -> &str {
        match self.direction {
            Direction::SourceToTarget => &self.pair.source,
            Direction::TargetToSource => &self.pair.target,
        }
    }
}

/// A configured vocabulary source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabSource {
    pub id: String,
    pub label: String,
    /// File path (relative to the vocabulary root) or URL.
    #[serde(alias = "path")]
    pub locator: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl VocabSource {
    pub fn new(id: &str, label: &str, locator: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            locator: locator.to_string(),
            enabled: true,
        }
    }
}

/// Lifecycle of a drill session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Vocabulary is being (re)loaded.
    Loading,
    AwaitingAnswer,
    /// Feedback for the last answer is visible until the next prompt.
    ShowingFeedback,
    /// No word was loaded from the enabled sources.
    Empty,
    /// The working pool ran dry.
    Exhausted,
}
