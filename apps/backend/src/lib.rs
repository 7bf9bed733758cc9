pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_core::{QuizSession, SourceCatalog};

use crate::config::Config;
use crate::services::fetcher::VocabFetcher;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<QuizSession>>,
    pub catalog: Arc<Mutex<SourceCatalog>>,
    pub fetcher: Arc<VocabFetcher>,
    pub advance_delay: Duration,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_session(config, QuizSession::new(config.adaptive))
    }

    /// State around a caller-provided session (e.g. a seeded one).
    pub fn with_session(config: &Config, session: QuizSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            catalog: Arc::new(Mutex::new(SourceCatalog::new(config.sources.clone()))),
            fetcher: Arc::new(VocabFetcher::new(config.vocab_dir.clone())),
            advance_delay: config.advance_delay,
        }
    }
}

/// Build the API router, optionally serving a front end from `static_dir`.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        // Source routes
        .route("/api/sources", get(routes::sources::list))
        .route("/api/sources/{id}", put(routes::sources::update))
        // Session routes
        .route("/api/session", get(routes::session::view))
        .route("/api/session/rebuild", post(routes::session::rebuild))
        .route("/api/session/answer", post(routes::session::answer))
        .route("/api/session/skip", post(routes::session::skip))
        .route("/api/session/adaptive", put(routes::session::set_adaptive))
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Vocabulary root: {} ({} sources)",
        config.vocab_dir.display(),
        config.sources.len()
    );

    let state = AppState::new(&config);

    // Initial load, like opening the page
    services::drill::rebuild(&state).await;

    let app = build_router(state, config.static_dir.as_deref())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
