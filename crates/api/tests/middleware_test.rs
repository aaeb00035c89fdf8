use axum::http::StatusCode;
use axum::response::IntoResponse;

use rollcall_api::middleware::auth;
use rollcall_api::middleware::error_handling::AppError;
use rollcall_core::errors::RollcallError;

fn status_of(error: RollcallError) -> StatusCode {
    AppError(error).into_response().status()
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let status = status_of(RollcallError::NotFound("Resource not found".to_string()));
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let status = status_of(RollcallError::Validation("Invalid input".to_string()));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let status = status_of(RollcallError::Authentication("Invalid password".to_string()));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_conflict() {
    let status = status_of(RollcallError::Conflict("Already exists".to_string()));
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_no_active_class() {
    let status = status_of(RollcallError::NoActiveClass);
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_error_handling_class_mismatch() {
    let status = status_of(RollcallError::ClassMismatch {
        expected: "MTH-302".to_string(),
        got: "PHY-410".to_string(),
    });
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_error_handling_database() {
    let status = status_of(RollcallError::Database(eyre::eyre!("Database error")));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let status = status_of(RollcallError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    ))));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_password_hashing_salts_each_call() {
    let first = auth::hash_password("hunter2").expect("hashing should succeed");
    let second = auth::hash_password("hunter2").expect("hashing should succeed");

    assert_ne!(first, second);
}
