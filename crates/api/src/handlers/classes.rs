use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use rollcall_core::models::class::{ClassRecord, CreateClassRequest, DeleteClassResponse};
use rollcall_core::models::schedule::ScheduleSnapshot;

use crate::ApiState;
use crate::middleware::error_handling::AppError;

/// The schedule view: a forced re-evaluation, so callers always read
/// statuses consistent with the clock rather than the last timer tick.
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ScheduleSnapshot>, AppError> {
    let snapshot = state.engine.refresh().await?;
    Ok(Json(snapshot))
}

#[axum::debug_handler]
pub async fn create_class(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateClassRequest>,
) -> Result<Json<ClassRecord>, AppError> {
    let class = state.engine.add_class(payload).await?;
    Ok(Json(class))
}

#[axum::debug_handler]
pub async fn delete_class(
    State(state): State<Arc<ApiState>>,
    Path(code): Path<String>,
) -> Result<Json<DeleteClassResponse>, AppError> {
    state.engine.remove_class(&code).await?;

    Ok(Json(DeleteClassResponse {
        code,
        deleted: true,
    }))
}
