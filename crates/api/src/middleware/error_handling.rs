//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint fails the same way. The two attendance rejections deliberately
//! keep distinct variants (and statuses): "no class currently active" and
//! "wrong class code" are different operator-actionable conditions.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use rollcall_core::errors::RollcallError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// Wraps [`RollcallError`] and implements `IntoResponse`, which lets
/// handlers return `Result<Json<T>, AppError>` and use `?` throughout.
#[derive(Debug)]
pub struct AppError(pub RollcallError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            RollcallError::NotFound(_) => StatusCode::NOT_FOUND,
            RollcallError::Validation(_) => StatusCode::BAD_REQUEST,
            RollcallError::Authentication(_) => StatusCode::UNAUTHORIZED,
            RollcallError::Conflict(_) => StatusCode::CONFLICT,
            RollcallError::NoActiveClass => StatusCode::CONFLICT,
            RollcallError::ClassMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RollcallError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RollcallError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on functions returning `Result<T, RollcallError>`.
impl From<RollcallError> for AppError {
    fn from(err: RollcallError) -> Self {
        AppError(err)
    }
}

/// Allows `?` on functions returning `eyre::Result<T>`; the report is
/// carried as a database-layer failure.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(RollcallError::Database(err))
    }
}
