use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/constraints",
        post(handlers::constraints::add_constraint)
            .delete(handlers::constraints::remove_constraint),
    )
}
