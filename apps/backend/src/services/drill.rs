//! Drill orchestration: reloading vocabulary and the delayed advance.

use vocab_core::{load_vocabulary, AdvanceToken, LoadReport, VocabSource};

use crate::AppState;

/// Reload every enabled source and reset the session.
///
/// Sources are fetched one at a time in catalog order. The session stays in
/// the loading phase meanwhile, so answers submitted during a reload are ignored.
/// If another reload starts before this one finishes, this report is dropped.
pub async fn rebuild(state: &AppState) -> LoadReport {
    let ticket = state.session.lock().await.begin_loading();

    let sources: Vec<VocabSource> = state.catalog.lock().await.enabled().cloned().collect();
    tracing::info!("Loading {} vocabulary source(s)...", sources.len());

    let report = load_vocabulary(state.fetcher.as_ref(), &sources).await;

    for summary in &report.sources {
        tracing::info!("Loaded {} ({} words)", summary.id, summary.words);
    }
    for notice in &report.notices {
        tracing::warn!("Source {} unavailable: {}", notice.id, notice.message);
    }
    if report.is_empty() {
        tracing::warn!("No words loaded; check the enabled sources and their files");
    }

    if !state.session.lock().await.rebuild(&report, ticket) {
        tracing::info!("Discarded load superseded by a newer reload");
    }
    report
}

/// Move to the next prompt once the feedback delay has elapsed.
///
/// The token makes this a no-op if the session was reloaded or advanced in
/// the meantime.
pub fn schedule_advance(state: AppState, token: AdvanceToken) {
    tokio::spawn(async move {
        tokio::time::sleep(state.advance_delay).await;
        let advanced = state.session.lock().await.advance(token);
        if !advanced {
            tracing::debug!("Skipped stale advance");
        }
    });
}
