//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from vocab-core
pub use vocab_core::{SessionView, SourceNotice, SourceSummary, VocabSource};

// === API Request/Response Types ===

#[derive(Debug, Serialize)]
pub struct SourceListResponse {
    pub sources: Vec<VocabSource>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateSourceRequest {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct RebuildResponse {
    pub view: SessionView,
    pub sources: Vec<SourceSummary>,
    pub notices: Vec<SourceNotice>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    /// False when the answer was ignored (empty, or no prompt waiting).
    pub graded: bool,
    pub view: SessionView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdaptiveModeRequest {
    pub enabled: bool,
}
