use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/classes", get(handlers::classes::get_schedule))
        .route("/api/classes", post(handlers::classes::create_class))
        .route("/api/classes/:code", delete(handlers::classes::delete_class))
}
