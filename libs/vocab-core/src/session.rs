//! Drill session controller.
//!
//! `QuizSession` owns all mutable state of one drill: the master vocabulary,
//! the working pool, the current prompt, the score and the adaptive flag.
//! Front ends drive it through `begin_loading`/`rebuild`, `submit_answer`,
//! `advance` and `set_adaptive_mode`, and render `view()`.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::loader::LoadReport;
use crate::matching::check_answer;
use crate::quiz::QuizEngine;
use crate::score::Score;
use crate::types::{Direction, Phase, Prompt, WordPair};

/// Feedback for the last graded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub answer: String,
    pub accepted_answers: Vec<String>,
}

/// Handle for the delayed move to the next prompt.
///
/// Only the most recently issued token is honoured; reloading or advancing
/// invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken(u64);

/// Identifies one reload started with `QuizSession::begin_loading`.
///
/// Only the report of the most recent reload is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Result of `QuizSession::submit_answer`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Empty input, or no prompt is waiting for an answer.
    Ignored,
    Graded {
        feedback: Feedback,
        token: AdvanceToken,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptView {
    pub text: String,
    pub direction: Direction,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreView {
    pub correct: u32,
    pub total: u32,
    pub percent: f64,
}

impl From<Score> for ScoreView {
    fn from(score: Score) -> Self {
        Self {
            correct: score.correct,
            total: score.total,
            percent: score.percent(),
        }
    }
}

/// Read-only projection of the session for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub message: Option<&'static str>,
    pub prompt: Option<PromptView>,
    pub feedback: Option<Feedback>,
    pub score: ScoreView,
    pub adaptive: bool,
    pub pool_size: usize,
    pub vocabulary_size: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

pub struct QuizSession {
    vocabulary: Vec<WordPair>,
    engine: QuizEngine,
    score: Score,
    adaptive: bool,
    phase: Phase,
    feedback: Option<Feedback>,
    generation: u64,
    loads: u64,
    loaded_at: Option<DateTime<Utc>>,
    rng: StdRng,
}

impl QuizSession {
    pub fn new(adaptive: bool) -> Self {
        Self::with_rng(adaptive, StdRng::from_os_rng())
    }

    /// Session with a deterministic random sequence.
    pub fn with_seed(adaptive: bool, seed: u64) -> Self {
        Self::with_rng(adaptive, StdRng::seed_from_u64(seed))
    }

    fn with_rng(adaptive: bool, rng: StdRng) -> Self {
        Self {
            vocabulary: Vec::new(),
            engine: QuizEngine::default(),
            score: Score::default(),
            adaptive,
            phase: Phase::Loading,
            feedback: None,
            generation: 0,
            loads: 0,
            loaded_at: None,
            rng,
        }
    }

    /// Enter the loading state and cancel any pending advance.
    ///
    /// Starting a new load supersedes every ticket handed out before.
    pub fn begin_loading(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loads += 1;
        self.phase = Phase::Loading;
        self.feedback = None;
        LoadTicket(self.loads)
    }

    /// Install freshly loaded vocabulary, reset pool and score, and show the first prompt.
    ///
    /// Returns `false` and leaves the session untouched if a newer load was
    /// started after `ticket` was issued.
    pub fn rebuild(&mut self, report: &LoadReport, ticket: LoadTicket) -> bool {
        if ticket.0 != self.loads {
            return false;
        }
        self.generation += 1;
        self.vocabulary = report.vocabulary.clone();
        self.engine.reset(&self.vocabulary);
        self.score.reset();
        self.loaded_at = Some(report.loaded_at);
        self.next_prompt();
        true
    }

    /// Grade an answer for the current prompt.
    ///
    /// Empty input and answers outside `AwaitingAnswer` are ignored, so a
    /// second submission while feedback is showing has no effect. Input made
    /// of spaces only is graded like any other answer.
    pub fn submit_answer(&mut self, input: &str) -> SubmitOutcome {
        if input.is_empty() || self.phase != Phase::AwaitingAnswer {
            return SubmitOutcome::Ignored;
        }
        let Some(prompt) = self.engine.current().cloned() else {
            return SubmitOutcome::Ignored;
        };

        let result = check_answer(input, &prompt, &self.vocabulary);
        self.score.record(result.is_correct);
        if !result.is_correct && self.adaptive {
            self.engine.requeue(&prompt.pair);
        }

        let feedback = Feedback {
            is_correct: result.is_correct,
            answer: input.to_string(),
            accepted_answers: result.accepted_answers,
        };
        self.feedback = Some(feedback.clone());
        self.phase = Phase::ShowingFeedback;
        self.generation += 1;

        SubmitOutcome::Graded {
            feedback,
            token: AdvanceToken(self.generation),
        }
    }

    /// Move on to the next prompt if `token` is still current. Returns whether it did.
    pub fn advance(&mut self, token: AdvanceToken) -> bool {
        if token.0 != self.generation || self.phase != Phase::ShowingFeedback {
            return false;
        }
        self.generation += 1;
        self.next_prompt();
        true
    }

    /// Leave the feedback screen right away.
    pub fn skip(&mut self) -> bool {
        self.advance(AdvanceToken(self.generation))
    }

    pub fn set_adaptive_mode(&mut self, enabled: bool) {
        self.adaptive = enabled;
    }

    fn next_prompt(&mut self) {
        self.feedback = None;
        self.phase = if self.vocabulary.is_empty() {
            Phase::Empty
        } else if self.engine.select_next(&mut self.rng).is_some() {
            Phase::AwaitingAnswer
        } else {
            Phase::Exhausted
        };
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn adaptive(&self) -> bool {
        self.adaptive
    }

    pub fn vocabulary(&self) -> &[WordPair] {
        &self.vocabulary
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn current_prompt(&self) -> Option<&Prompt> {
        match self.phase {
            Phase::AwaitingAnswer | Phase::ShowingFeedback => self.engine.current(),
            _ => None,
        }
    }

    pub fn view(&self) -> SessionView {
        let message = match self.phase {
            Phase::Loading => Some("Loading vocabulary..."),
            Phase::Empty => Some("No words loaded. Check the selected lists and their files."),
            Phase::Exhausted => Some("Well done! Reload the lists to start again."),
            Phase::AwaitingAnswer | Phase::ShowingFeedback => None,
        };

        SessionView {
            phase: self.phase,
            message,
            prompt: self.current_prompt().map(|p| PromptView {
                text: p.text().to_string(),
                direction: p.direction,
                label: p.direction.label(),
            }),
            feedback: self.feedback.clone(),
            score: self.score.into(),
            adaptive: self.adaptive,
            pool_size: self.engine.pool_len(),
            vocabulary_size: self.vocabulary.len(),
            loaded_at: self.loaded_at,
        }
    }
}
