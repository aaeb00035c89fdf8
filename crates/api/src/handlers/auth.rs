use std::sync::Arc;

use axum::{Json, extract::State};

use rollcall_core::errors::RollcallError;
use rollcall_core::models::student::{LoginRequest, LoginResponse, LoginRole};

use crate::ApiState;
use crate::middleware::error_handling::AppError;

/// Role-based login check. A credential mismatch is a `valid: false`
/// response, not an error; only malformed requests fail.
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let valid = match payload.role {
        LoginRole::Student => {
            let id = payload.student_id.as_deref().ok_or_else(|| {
                AppError(RollcallError::Validation(
                    "student_id is required for student logins".to_string(),
                ))
            })?;

            state.roster.verify_credentials(id, &payload.password).await?
        }
        LoginRole::Staff => state
            .staff_password
            .as_deref()
            .is_some_and(|expected| expected == payload.password),
    };

    Ok(Json(LoginResponse {
        valid,
        role: payload.role,
    }))
}
