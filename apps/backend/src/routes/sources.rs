//! Source catalog endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/sources
pub async fn list(State(state): State<AppState>) -> Json<SourceListResponse> {
    let catalog = state.catalog.lock().await;
    Json(SourceListResponse {
        sources: catalog.sources().to_vec(),
    })
}

/// PUT /api/sources/{id}
/// Takes effect on the next rebuild
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateSourceRequest>, JsonRejection>,
) -> Result<Json<VocabSource>> {
    let Json(request) = payload?;
    let mut catalog = state.catalog.lock().await;

    let source = catalog
        .set_enabled(&id, request.enabled)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Source {}", id)))?;

    tracing::info!("Source {} enabled: {}", source.id, source.enabled);
    Ok(Json(source))
}
