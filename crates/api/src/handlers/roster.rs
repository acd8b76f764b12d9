//! # Roster Handlers
//!
//! Add, edit, and delete people on the duty roster. Each mutation follows the
//! two-phase apply: the session is updated first, then the resulting
//! change-set is replayed against the store and the outcome reported through
//! the `synced` flag.

use axum::{
    extract::{Path, State},
    Json,
};
use rotaplan_core::models::requests::{AddUserRequest, EditUserRequest, MutationResponse};
use rotaplan_core::ops;
use std::sync::Arc;

use crate::{handlers::sync_changes, middleware::error_handling::AppError, ApiState};

/// Adds a person to the roster.
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// {"name": "Dr. A", "limit": 4}
/// ```
///
/// # Errors
///
/// * 400 on an empty name or a zero duty limit
/// * 409 when the name is already taken
#[axum::debug_handler]
pub async fn add_user(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<AddUserRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes = {
        let mut session = state.session.write().await;
        ops::add_person(&mut session, &payload.name, payload.limit)?
    };

    let synced = sync_changes(state.store.as_ref(), &changes).await;
    Ok(Json(MutationResponse::new(synced)))
}

/// Renames a person and/or changes their duty limit.
///
/// Editing a name not on the roster is a no-op, reported as success with
/// nothing to sync.
///
/// # Endpoint
///
/// ```text
/// PUT /api/users/:name
/// {"new_name": "Dr. Z", "new_limit": 2}
/// ```
#[axum::debug_handler]
pub async fn edit_user(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
    Json(payload): Json<EditUserRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes = {
        let mut session = state.session.write().await;
        ops::edit_person(&mut session, &name, &payload.new_name, payload.new_limit)?
    };

    let synced = sync_changes(state.store.as_ref(), &changes).await;
    Ok(Json(MutationResponse::new(synced)))
}

/// Deletes a person from the roster.
///
/// Their constraints are cascaded away; their past schedule entries remain
/// visible under the departed name. Deleting an unknown name is a no-op.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/users/:name
/// ```
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<ApiState>>,
    Path(name): Path<String>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes = {
        let mut session = state.session.write().await;
        ops::delete_person(&mut session, &name)?
    };

    let synced = sync_changes(state.store.as_ref(), &changes).await;
    Ok(Json(MutationResponse::new(synced)))
}
