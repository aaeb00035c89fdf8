use std::sync::Arc;

use axum::{Json, extract::State};

use rollcall_core::models::student::{ScanRequest, ScanResponse};

use crate::ApiState;
use crate::middleware::error_handling::AppError;

/// Marks a student present from a decoded QR payload (or the simulated
/// face match, which produces the same payload).
///
/// The schedule is re-evaluated first so the mark is validated against a
/// guaranteed-fresh active class. The rejection cases stay distinct:
/// unknown student (404), no class in progress (409), and a scanned code
/// that is not the active class (422).
#[axum::debug_handler]
pub async fn scan(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    let snapshot = state.engine.refresh().await?;

    let response = state
        .roster
        .mark_attendance(
            &payload.student_id,
            payload.class_code.as_deref(),
            snapshot.current.as_ref(),
        )
        .await?;

    Ok(Json(response))
}
