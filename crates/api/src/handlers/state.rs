//! # Session State Handlers
//!
//! The fetch-all snapshot of the current session, and the reconciliation
//! path: reloading the session from the store discards any local changes
//! that failed to sync.

use axum::{extract::State, Json};
use rotaplan_core::models::StateSnapshot;
use rotaplan_core::state::RosterState;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// The current session in canonical wire form.
///
/// # Endpoint
///
/// ```text
/// GET /api/state
/// ```
#[axum::debug_handler]
pub async fn get_state(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<StateSnapshot>, AppError> {
    let session = state.session.read().await;
    Ok(Json(session.to_snapshot()))
}

/// Replaces the session with a fresh fetch from the store.
///
/// This is the only path that corrects a session that ran ahead of the store
/// after a failed sync.
///
/// # Endpoint
///
/// ```text
/// POST /api/state/reload
/// ```
#[axum::debug_handler]
pub async fn reload(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<StateSnapshot>, AppError> {
    let snapshot = state.store.fetch_all().await?;
    let mut session = state.session.write().await;
    *session = RosterState::from_snapshot(&snapshot);

    tracing::info!(
        "Session reloaded from store: {} people, {} schedule entries",
        session.people.len(),
        session.schedule.len()
    );
    Ok(Json(session.to_snapshot()))
}
