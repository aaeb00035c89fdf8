/// Credential hashing for student accounts
pub mod auth;
/// Domain error to HTTP response mapping
pub mod error_handling;
