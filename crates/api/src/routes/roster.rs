use axum::{
    routing::{post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/users", post(handlers::roster::add_user))
        .route(
            "/api/users/:name",
            put(handlers::roster::edit_user).delete(handlers::roster::delete_user),
        )
}
