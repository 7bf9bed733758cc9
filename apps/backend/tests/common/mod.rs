//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up a server over a temporary vocabulary directory
//! - Helper functions for building request bodies and answering prompts

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use vocab_core::{QuizSession, VocabSource};
use vocab_drill_backend::config::Config;
use vocab_drill_backend::{build_router, AppState};

/// Feedback delay used by the test server.
pub const ADVANCE_DELAY_MS: u64 = 50;

/// Test context holding the vocabulary directory and application state.
///
/// The directory is removed when the context is dropped.
pub struct TestContext {
    pub state: AppState,
    pub dir: TempDir,
    app: Router,
}

impl TestContext {
    /// Create a context with the standard fixture files and catalog.
    pub fn new() -> Self {
        Self::with_files(fixtures::VOCAB_FILES, fixtures::sources())
    }

    /// Create a context with custom files and sources.
    pub fn with_files(files: &[(&str, &str)], sources: Vec<VocabSource>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create vocabulary directory");
        for (path, content) in files {
            let full = dir.path().join(path);
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create directory");
            }
            std::fs::write(full, content).expect("Failed to write vocabulary file");
        }

        let vocab_dir = dir.path().to_string_lossy().to_string();
        let delay = ADVANCE_DELAY_MS.to_string();
        let mut config = Config::from_lookup(|key| match key {
            "VOCAB_DIR" => Some(vocab_dir.clone()),
            "ADVANCE_DELAY_MS" => Some(delay.clone()),
            _ => None,
        })
        .expect("Failed to build test config");
        config.sources = sources;

        let state = AppState::with_session(&config, QuizSession::with_seed(true, 7));
        let app = build_router(state.clone(), None);

        Self { state, dir, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }
}

/// Wait until a scheduled advance has certainly fired.
pub async fn wait_for_advance() {
    tokio::time::sleep(std::time::Duration::from_millis(ADVANCE_DELAY_MS * 6)).await;
}
