use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};

use rollcall_core::models::student::{
    AttendanceStatus, CreateStudentRequest, StudentRecord, UpdateStudentStatusRequest,
};

use crate::ApiState;
use crate::middleware::{auth, error_handling::AppError};

#[axum::debug_handler]
pub async fn list_students(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<StudentRecord>>, AppError> {
    let roster = state.roster.roster().await?;
    Ok(Json(roster))
}

#[axum::debug_handler]
pub async fn get_student(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> Result<Json<StudentRecord>, AppError> {
    let student = state.roster.get(&id).await?;
    Ok(Json(student))
}

#[axum::debug_handler]
pub async fn create_student(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<Json<StudentRecord>, AppError> {
    // Hash before anything touches the store
    let password_hash = auth::hash_password(&payload.password)?;

    let student = state
        .roster
        .add_student(payload.id, payload.name, password_hash)
        .await?;

    Ok(Json(student))
}

/// Manual staff override of a student's status.
///
/// When marking Present without an explicit class code, the currently
/// active class (if any) is used, so the mark still lands in the
/// attendance history.
#[axum::debug_handler]
pub async fn update_student_status(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStudentStatusRequest>,
) -> Result<Json<StudentRecord>, AppError> {
    let class_code = match (&payload.status, &payload.class_code) {
        (AttendanceStatus::Present, None) => {
            let snapshot = state.engine.refresh().await?;
            snapshot.current.map(|class| class.code)
        }
        _ => payload.class_code.clone(),
    };

    let student = state
        .roster
        .set_status(&id, payload.status, class_code.as_deref())
        .await?;

    Ok(Json(student))
}
