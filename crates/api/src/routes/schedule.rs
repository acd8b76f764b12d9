use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/schedule/generate", post(handlers::schedule::generate))
        .route("/api/schedule/counts", get(handlers::schedule::counts))
}
