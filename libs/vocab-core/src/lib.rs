//! Core vocabulary drill library.
//!
//! Provides:
//! - Plain-text parser for `source: target` word lists
//! - Vocabulary loading from user-selected sources
//! - Quiz engine with adaptive re-queueing of missed words
//! - Accent-insensitive answer matching
//! - Score tracking and the session controller tying it together

pub mod error;
pub mod loader;
pub mod matching;
pub mod parser;
pub mod quiz;
pub mod score;
pub mod session;
pub mod types;

pub use error::FetchError;
pub use loader::{load_vocabulary, LoadReport, SourceCatalog, SourceFetcher, SourceNotice, SourceSummary};
pub use matching::{accepted_answers, check_answer, normalize, MatchResult};
pub use parser::parse;
pub use quiz::{QuizEngine, REQUEUE_COPIES};
pub use score::Score;
pub use session::{AdvanceToken, Feedback, LoadTicket, QuizSession, SessionView, SubmitOutcome};
pub use types::{Direction, Phase, Prompt, VocabSource, WordPair};
