use axum::{
    routing::{delete, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/holidays", post(handlers::holidays::add_holiday))
        .route(
            "/api/holidays/:date",
            delete(handlers::holidays::remove_holiday),
        )
}
