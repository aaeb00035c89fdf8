use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("No class is currently in progress")]
    NoActiveClass,

    #[error("Class {got} is not in progress; the active class is {expected}")]
    ClassMismatch { expected: String, got: String },

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type RollcallResult<T> = Result<T, RollcallError>;
