//! Error types for vocab-core.

use thiserror::Error;

/// Errors a source fetcher can report. All of them are recoverable: the
/// failing source contributes no words and loading continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{locator} not found")]
    NotFound { locator: String },

    #[error("{locator} returned HTTP {status}")]
    Status { locator: String, status: u16 },

    #[error("failed to read {locator}: {message}")]
    Io { locator: String, message: String },
}
