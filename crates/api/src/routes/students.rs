use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/students", get(handlers::students::list_students))
        .route("/api/students", post(handlers::students::create_student))
        .route("/api/students/:id", get(handlers::students::get_student))
        .route(
            "/api/students/:id/status",
            put(handlers::students::update_student_status),
        )
}
