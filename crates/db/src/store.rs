//! The two collaborator surfaces the rest of the workspace consumes.
//!
//! The engine and API crates only ever see these traits; the Postgres
//! implementations live in [`crate::repositories`] and the mockall versions
//! in [`crate::mock`].

use async_trait::async_trait;
use eyre::Result;

use rollcall_core::lifecycle::StatusChange;
use rollcall_core::models::class::ClassRecord;
use rollcall_core::models::student::{AttendanceStatus, StudentRecord};

/// The schedule collection: class records keyed by code.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// All classes in insertion order.
    async fn list_classes(&self) -> Result<Vec<ClassRecord>>;

    async fn get_class(&self, code: &str) -> Result<Option<ClassRecord>>;

    /// Returns `false` when the code is already taken.
    async fn insert_class(&self, record: &ClassRecord) -> Result<bool>;

    /// Returns `false` when no such class existed.
    async fn delete_class(&self, code: &str) -> Result<bool>;

    /// Applies every change in a single transaction; a partially applied
    /// status commit must never become visible.
    async fn apply_status_changes(&self, changes: &[StatusChange]) -> Result<()>;
}

/// The roster collection: student records keyed by id.
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// All students in insertion order, attendance history attached.
    async fn list_students(&self) -> Result<Vec<StudentRecord>>;

    async fn get_student(&self, id: &str) -> Result<Option<StudentRecord>>;

    /// Returns `false` when the id is already taken.
    async fn insert_student(&self, record: &StudentRecord, password_hash: &str) -> Result<bool>;

    /// Checks a student's password against the stored hash. An unknown id
    /// or a mismatch is `false`, never an error.
    async fn verify_credentials(&self, id: &str, password: &str) -> Result<bool>;

    /// Returns `false` when no such student existed.
    async fn set_status(&self, id: &str, status: AttendanceStatus) -> Result<bool>;

    /// Records a Present mark in the history; idempotent per
    /// (student, class).
    async fn record_attendance(&self, id: &str, class_code: &str) -> Result<()>;

    /// Sets every student back to Absent in one statement; returns the
    /// number of affected rows.
    async fn reset_all_statuses(&self) -> Result<u64>;
}
