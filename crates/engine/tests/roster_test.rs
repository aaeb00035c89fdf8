mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;

use rollcall_core::errors::RollcallError;
use rollcall_core::models::class::ClassStatus;
use rollcall_core::models::student::AttendanceStatus;
use rollcall_db::store::RosterStore;
use rollcall_engine::roster::RosterService;

use common::{MemRosterStore, class, student};

async fn build_service(store: MemRosterStore) -> (RosterService, Arc<MemRosterStore>) {
    let store = Arc::new(store);
    let service = RosterService::new(store.clone())
        .await
        .expect("roster service should build");

    (service, store)
}

#[tokio::test]
async fn test_mark_attendance_is_idempotent_per_class() {
    let (service, _) =
        build_service(MemRosterStore::with_students(vec![student("S001", "Liam Johnson")])).await;
    let active = class("MTH-302", "09:00 AM - 10:00 AM", ClassStatus::InProgress);

    let first = service
        .mark_attendance("S001", None, Some(&active))
        .await
        .unwrap();
    assert_eq!(first.student.status, AttendanceStatus::Present);
    assert_eq!(first.class_code, "MTH-302");

    // Scanning the same badge twice must not duplicate the history entry.
    let second = service
        .mark_attendance("S001", Some("MTH-302"), Some(&active))
        .await
        .unwrap();
    assert_eq!(
        second.student.attended_classes,
        vec!["MTH-302".to_string()]
    );
}

#[tokio::test]
async fn test_mark_attendance_distinguishes_rejections() {
    let (service, _) =
        build_service(MemRosterStore::with_students(vec![student("S001", "Liam Johnson")])).await;
    let active = class("MTH-302", "09:00 AM - 10:00 AM", ClassStatus::InProgress);

    // No class in progress at all.
    let err = service
        .mark_attendance("S001", None, None)
        .await
        .expect_err("marking without an active class must fail");
    assert!(matches!(err, RollcallError::NoActiveClass));

    // A code that is not the active class.
    let err = service
        .mark_attendance("S001", Some("PHY-410"), Some(&active))
        .await
        .expect_err("marking against the wrong class must fail");
    assert!(matches!(
        err,
        RollcallError::ClassMismatch { ref expected, ref got }
            if expected == "MTH-302" && got == "PHY-410"
    ));

    // An id nobody knows.
    let err = service
        .mark_attendance("S999", None, Some(&active))
        .await
        .expect_err("unknown student must fail");
    assert!(matches!(err, RollcallError::NotFound(_)));
}

#[tokio::test]
async fn test_manual_present_records_history() {
    let (service, store) =
        build_service(MemRosterStore::with_students(vec![student("S002", "Olivia Smith")])).await;

    let updated = service
        .set_status("S002", AttendanceStatus::Present, Some("LIT-201"))
        .await
        .unwrap();
    assert_eq!(updated.status, AttendanceStatus::Present);
    assert_eq!(updated.attended_classes, vec!["LIT-201".to_string()]);

    // Toggling back to Absent keeps the history.
    let updated = service
        .set_status("S002", AttendanceStatus::Absent, None)
        .await
        .unwrap();
    assert_eq!(updated.status, AttendanceStatus::Absent);
    assert_eq!(updated.attended_classes, vec!["LIT-201".to_string()]);

    let stored = store.get_student("S002").await.unwrap().unwrap();
    assert_eq!(stored.attended_classes, vec!["LIT-201".to_string()]);
}

#[tokio::test]
async fn test_manual_present_for_unknown_student_is_not_found() {
    let (service, store) =
        build_service(MemRosterStore::with_students(vec![student("S001", "Liam Johnson")])).await;

    // A mistyped id with a class code must be a clean NotFound, not a
    // store-level failure from the history insert.
    let err = service
        .set_status("S999", AttendanceStatus::Present, Some("MTH-302"))
        .await
        .expect_err("unknown student must be rejected");
    assert!(matches!(err, RollcallError::NotFound(_)));

    // Nothing about the known roster changed.
    let s001 = store.get_student("S001").await.unwrap().unwrap();
    assert_eq!(s001.status, AttendanceStatus::Absent);
    assert_eq!(s001.attended_classes, Vec::<String>::new());
}

#[tokio::test]
async fn test_add_student_rejects_duplicates() {
    let (service, _) = build_service(MemRosterStore::default()).await;

    let added = service
        .add_student("S001".to_string(), "Liam Johnson".to_string(), "hash".to_string())
        .await
        .unwrap();
    assert_eq!(added.status, AttendanceStatus::Absent);

    let err = service
        .add_student("S001".to_string(), "Imposter".to_string(), "hash".to_string())
        .await
        .expect_err("duplicate id must be rejected");
    assert!(matches!(err, RollcallError::Conflict(_)));
}

#[tokio::test]
async fn test_subscribers_see_every_mutation() {
    let (service, _) =
        build_service(MemRosterStore::with_students(vec![student("S001", "Liam Johnson")])).await;
    let active = class("MTH-302", "09:00 AM - 10:00 AM", ClassStatus::InProgress);

    let mut rx = service.subscribe();
    // Current roster delivered immediately.
    assert_eq!(rx.borrow_and_update().len(), 1);

    service
        .mark_attendance("S001", None, Some(&active))
        .await
        .unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(
        rx.borrow_and_update()[0].status,
        AttendanceStatus::Present
    );

    service.reset_all_statuses().await.unwrap();
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update()[0].status, AttendanceStatus::Absent);
}

#[tokio::test]
async fn test_verify_credentials_reports_mismatch_as_false() {
    let (service, _) =
        build_service(MemRosterStore::with_students(vec![student("S001", "Liam Johnson")])).await;

    assert!(service.verify_credentials("S001", "password").await.unwrap());
    assert!(!service.verify_credentials("S001", "wrong").await.unwrap());
    assert!(!service.verify_credentials("S999", "password").await.unwrap());
}
