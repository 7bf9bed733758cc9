//! Drill session endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use vocab_core::SubmitOutcome;

use crate::error::Result;
use crate::models::*;
use crate::services::drill;
use crate::AppState;

/// GET /api/session
pub async fn view(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.session.lock().await.view())
}

/// POST /api/session/rebuild
/// Reloads the enabled sources and resets pool and score
pub async fn rebuild(State(state): State<AppState>) -> Json<RebuildResponse> {
    let report = drill::rebuild(&state).await;
    let view = state.session.lock().await.view();

    Json(RebuildResponse {
        view,
        sources: report.sources,
        notices: report.notices,
    })
}

/// POST /api/session/answer
pub async fn answer(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<Json<SubmitAnswerResponse>> {
    let Json(request) = payload?;
    let mut session = state.session.lock().await;

    let graded = match session.submit_answer(&request.answer) {
        SubmitOutcome::Graded { feedback, token } => {
            tracing::debug!(correct = feedback.is_correct, "Graded answer");
            drill::schedule_advance(state.clone(), token);
            true
        }
        SubmitOutcome::Ignored => false,
    };

    Ok(Json(SubmitAnswerResponse {
        graded,
        view: session.view(),
    }))
}

/// POST /api/session/skip
/// Shows the next prompt without waiting for the feedback delay
pub async fn skip(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.skip();
    Json(session.view())
}

/// PUT /api/session/adaptive
pub async fn set_adaptive(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AdaptiveModeRequest>, JsonRejection>,
) -> Result<Json<SessionView>> {
    let Json(request) = payload?;
    let mut session = state.session.lock().await;
    session.set_adaptive_mode(request.enabled);
    tracing::info!("Adaptive mode: {}", request.enabled);
    Ok(Json(session.view()))
}
