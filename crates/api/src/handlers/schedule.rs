//! # Schedule Handlers
//!
//! Generation of a month's duty assignments and the aggregate duty counters.
//!
//! ## Generation
//!
//! Generation is a pure computation over the session: every duty-weekday
//! slot of the target month is recomputed from scratch, holidays drop their
//! entries, and fairness decides each pick. Only the subsequent store write
//! can fail, in which case the freshly generated schedule lives in the
//! session alone until a reload or a retried generation.

use axum::{
    extract::{Query, State},
    Json,
};
use rotaplan_core::engine::counters;
use rotaplan_core::errors::RotaError;
use rotaplan_core::models::requests::{CountsResponse, GenerateRequest, GenerateResponse};
use rotaplan_core::ops;
use serde::Deserialize;
use std::sync::Arc;

use crate::{handlers::sync_changes, middleware::error_handling::AppError, ApiState};

/// Regenerates all duty assignments for one month.
///
/// # Endpoint
///
/// ```text
/// POST /api/schedule/generate
/// {"year": 2024, "month": 1}
/// ```
///
/// # Algorithm
///
/// 1. Reset the per-run tally; seed it from the rest of the year when the
///    fairness policy asks for it
/// 2. Enumerate the month's duty dates
/// 3. Holidays: drop both entries, skip
/// 4. Otherwise AM then PM: filter by availability, then by duty cap, rank
///    by fairness, commit the first candidate or the unassigned sentinel
/// 5. Persist the full schedule map to the store
///
/// # Errors
///
/// * 400 on a month outside 1..=12
#[axum::debug_handler]
pub async fn generate(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let (summary, changes, schedule) = {
        let mut session = state.session.write().await;
        let (summary, changes) =
            ops::generate_schedule(&mut session, payload.year, payload.month, &state.generator)?;
        (summary, changes, session.wire_schedule())
    };

    tracing::info!(
        "Generated {}-{:02}: {} assigned, {} unassigned, {} holidays skipped",
        payload.year,
        payload.month,
        summary.assigned,
        summary.unassigned,
        summary.holidays_skipped
    );

    let synced = sync_changes(state.store.as_ref(), &changes).await;
    Ok(Json(GenerateResponse {
        summary,
        synced,
        schedule,
    }))
}

/// Query parameters for the duty counts endpoint
#[derive(Debug, Deserialize)]
pub struct CountsQuery {
    pub year: i32,
    /// When present, counts are scoped to this month; otherwise the whole year
    pub month: Option<u32>,
}

/// Per-person duty counts for a month or a year.
///
/// Counts cover current roster members only: the unassigned sentinel and
/// stale names of deleted people contribute nothing.
///
/// # Endpoint
///
/// ```text
/// GET /api/schedule/counts?year=2024&month=1
/// ```
#[axum::debug_handler]
pub async fn counts(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<CountsQuery>,
) -> Result<Json<CountsResponse>, AppError> {
    if let Some(month) = query.month {
        if !(1..=12).contains(&month) {
            return Err(AppError(RotaError::Validation(format!(
                "Invalid month {month}: expected 1..=12"
            ))));
        }
    }

    let session = state.session.read().await;
    let counts = match query.month {
        Some(month) => counters::monthly_counts(&session, query.year, month),
        None => counters::yearly_counts(&session, query.year),
    };

    Ok(Json(CountsResponse {
        year: query.year,
        month: query.month,
        counts,
    }))
}
