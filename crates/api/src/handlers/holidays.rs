//! # Holiday Handlers
//!
//! Mark and unmark dates on which no duty occurs. Marking a holiday also
//! clears any schedule entries already generated for that date.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use rotaplan_core::models::requests::{HolidayRequest, MutationResponse};
use rotaplan_core::ops;
use std::sync::Arc;

use crate::{handlers::sync_changes, middleware::error_handling::AppError, ApiState};

/// Marks a date as a holiday.
///
/// # Endpoint
///
/// ```text
/// POST /api/holidays
/// {"date": "2024-05-01"}
/// ```
#[axum::debug_handler]
pub async fn add_holiday(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<HolidayRequest>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes = {
        let mut session = state.session.write().await;
        ops::add_holiday(&mut session, payload.date)?
    };

    let synced = sync_changes(state.store.as_ref(), &changes).await;
    Ok(Json(MutationResponse::new(synced)))
}

/// Unmarks a holiday. An unmarked date is a no-op.
///
/// # Endpoint
///
/// ```text
/// DELETE /api/holidays/:date
/// ```
#[axum::debug_handler]
pub async fn remove_holiday(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<MutationResponse>, AppError> {
    let changes = {
        let mut session = state.session.write().await;
        ops::remove_holiday(&mut session, date)?
    };

    let synced = sync_changes(state.store.as_ref(), &changes).await;
    Ok(Json(MutationResponse::new(synced)))
}
