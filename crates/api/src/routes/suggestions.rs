use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/suggestions",
            post(handlers::suggestions::task_suggestions),
        )
        .route("/api/routine", post(handlers::suggestions::daily_routine))
}
