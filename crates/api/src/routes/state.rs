use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/state", get(handlers::state::get_state))
        .route("/api/state/reload", post(handlers::state::reload))
}
