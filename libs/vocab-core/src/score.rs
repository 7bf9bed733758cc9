//! Running score for a drill session.

use serde::{Deserialize, Serialize};

/// Correct and total answer counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    /// Record one graded answer.
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Percentage of correct answers, rounded to one decimal place. 0 when nothing was answered.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.correct as f64 / self.total as f64 * 1000.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_to_one_decimal() {
        let score = Score { correct: 1, total: 3 };
        assert_eq!(score.percent(), 33.3);

        let score = Score { correct: 2, total: 3 };
        assert_eq!(score.percent(), 66.7);
    }

    #[test]
    fn test_percent_without_answers() {
        assert_eq!(Score::default().percent(), 0.0);
    }

    #[test]
    fn test_record() {
        let mut score = Score::default();
        score.record(true);
        score.record(false);
        score.record(true);
        assert_eq!(score, Score { correct: 2, total: 3 });
        assert!(score.correct <= score.total);

        score.reset();
        assert_eq!(score, Score::default());
    }
}
