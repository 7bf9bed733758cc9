//! Prompt selection and adaptive re-queueing.

use crate::types::{Direction, Prompt, WordPair};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Copies of a missed word appended to the pool in adaptive mode.
pub const REQUEUE_COPIES: usize = 10;

/// Working pool of words eligible for the next prompt.
///
/// Selection never removes a word; missed words are appended again so they
/// come up more often.
#[derive(Debug, Clone, Default)]
pub struct QuizEngine {
    pool: Vec<WordPair>,
    current: Option<Prompt>,
}

impl QuizEngine {
    pub fn new(vocabulary: &[WordPair]) -> Self {
        Self {
            pool: vocabulary.to_vec(),
            current: None,
        }
    }

    /// Replace the pool with a fresh copy of the vocabulary.
    pub fn reset(&mut self, vocabulary: &[WordPair]) {
        self.pool = vocabulary.to_vec();
        self.current = None;
    }

    /// Pick a random word and direction. Returns `None` if the pool is empty.
    pub fn select_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Prompt> {
        let Some(pair) = self.pool.choose(rng) else {
            self.current = None;
            return None;
        };

        let direction = if rng.random_bool(0.5) {
            Direction::SourceToTarget
        } else {
            Direction::TargetToSource
        };

        self.current = Some(Prompt {
            pair: pair.clone(),
            direction,
        });
        self.current.as_ref()
    }

    /// Append `REQUEUE_COPIES` copies of a word to the pool.
    pub fn requeue(&mut self, pair: &WordPair) {
        self.pool
            .extend(std::iter::repeat(pair).take(REQUEUE_COPIES).cloned());
    }

    pub fn current(&self) -> Option<&Prompt> {
        self.current.as_ref()
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Occurrences of a word in the pool.
    pub fn count_of(&self, pair: &WordPair) -> usize {
        self.pool.iter().filter(|p| *p == pair).count()
    }
}
