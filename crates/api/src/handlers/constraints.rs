//! # Constraint Handlers
//!
//! Record and lift per-person unavailability for a date+slot.

use axum::{extract::State, Json};
use rotaplan_core::models::requests::{ConstraintRequest, MutationResponse};
use rotaplan_core::ops;
use std::sync::Arc;

use crate::{handlers::sync_changes, middleware::error_handling::AppError, ApiState};

/// Marks a person unavailable for one date+slot.
///
/// Duplicate constraints are accepted; they filter the same as a single one.
///
/// # Endpoint
///
/// ```text
/// POST /api/constraints
/// {"user": "Dr. A", "date": "2024-01-03", "slot": "AM"}
/// ```
///
/// # Errors
///
/// * 400 when the user is not on the roster
#[axum::debug_handler]
pub async fn add_constraint(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ConstraintRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes = {
        let mut session = state.session.write().await;
        ops::add_constraint(&mut session, &payload.user, payload.date, payload.slot)?
    };

    let synced = sync_changes(state.store.as_ref(), &changes).await;
    Ok(Json(MutationResponse::new(synced)))
}

/// Removes at most one constraint matching user+date+slot exactly.
///
/// No matching constraint is a no-op, reported as success.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/constraints
/// {"user": "Dr. A", "date": "2024-01-03", "slot": "AM"}
/// ```
#[axum::debug_handler]
pub async fn remove_constraint(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ConstraintRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes = {
        let mut session = state.session.write().await;
        ops::remove_constraint(&mut session, &payload.user, payload.date, payload.slot)?
    };

    let synced = sync_changes(state.store.as_ref(), &changes).await;
    Ok(Json(MutationResponse::new(synced)))
}
