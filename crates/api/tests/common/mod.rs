#![allow(dead_code)]

use std::sync::Arc;

use rollcall_api::ApiState;
use rollcall_core::models::student::{AttendanceStatus, StudentRecord};
use rollcall_db::mock::repositories::{MockRosterStore, MockScheduleStore};
use rollcall_db::store::{RosterStore, ScheduleStore};
use rollcall_engine::lifecycle::LifecycleEngine;
use rollcall_engine::roster::RosterService;

pub fn student(id: &str, name: &str, status: AttendanceStatus) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        status,
        attended_classes: Vec::new(),
    }
}

/// Builds shared state over fully-configured mock stores.
///
/// The roster service reads the store once at construction to prime its
/// channel, so every caller must allow at least one `list_students` call.
pub async fn build_state(
    roster_store: MockRosterStore,
    schedule_store: MockScheduleStore,
    staff_password: Option<&str>,
) -> Arc<ApiState> {
    let roster_store: Arc<dyn RosterStore> = Arc::new(roster_store);
    let schedule_store: Arc<dyn ScheduleStore> = Arc::new(schedule_store);

    let roster = Arc::new(
        RosterService::new(roster_store)
            .await
            .expect("roster service should build over the mock store"),
    );
    let engine = Arc::new(LifecycleEngine::new(schedule_store, roster.clone()));

    Arc::new(ApiState {
        roster,
        engine,
        suggestions: None,
        staff_password: staff_password.map(str::to_string),
    })
}
