//! # Rollcall Core
//!
//! Pure domain logic for the Rollcall attendance service: clock-time range
//! parsing, class status derivation, schedule snapshot selection, and the
//! shared data model. Nothing in this crate performs I/O; the `engine` and
//! `api` crates drive these types against the persistence layer.

/// Clock-time tokens and the `"H:MM AM - H:MM PM"` range format
pub mod clock;
/// Error taxonomy shared across the workspace
pub mod errors;
/// Status derivation and schedule evaluation planning
pub mod lifecycle;
/// Domain records and request/response types
pub mod models;
