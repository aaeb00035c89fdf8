use async_trait::async_trait;
use eyre::Result;
use mockall::mock;

use rollcall_core::lifecycle::StatusChange;
use rollcall_core::models::class::ClassRecord;
use rollcall_core::models::student::{AttendanceStatus, StudentRecord};

use crate::store::{RosterStore, ScheduleStore};

// Mock stores for handler and service tests
mock! {
    pub ScheduleStore {}

    #[async_trait]
    impl ScheduleStore for ScheduleStore {
        async fn list_classes(&self) -> Result<Vec<ClassRecord>>;
        async fn get_class(&self, code: &str) -> Result<Option<ClassRecord>>;
        async fn insert_class(&self, record: &ClassRecord) -> Result<bool>;
        async fn delete_class(&self, code: &str) -> Result<bool>;
        async fn apply_status_changes(&self, changes: &[StatusChange]) -> Result<()>;
    }
}

mock! {
    pub RosterStore {}

    #[async_trait]
    impl RosterStore for RosterStore {
        async fn list_students(&self) -> Result<Vec<StudentRecord>>;
        async fn get_student(&self, id: &str) -> Result<Option<StudentRecord>>;
        async fn insert_student(&self, record: &StudentRecord, password_hash: &str) -> Result<bool>;
        async fn verify_credentials(&self, id: &str, password: &str) -> Result<bool>;
        async fn set_status(&self, id: &str, status: AttendanceStatus) -> Result<bool>;
        async fn record_attendance(&self, id: &str, class_code: &str) -> Result<()>;
        async fn reset_all_statuses(&self) -> Result<u64>;
    }
}
