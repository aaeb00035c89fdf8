//! In-memory store doubles for exercising the services without Postgres.
#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use eyre::{Result, eyre};

use rollcall_core::lifecycle::StatusChange;
use rollcall_core::models::class::{ClassRecord, ClassStatus};
use rollcall_core::models::student::{AttendanceStatus, StudentRecord};
use rollcall_db::store::{RosterStore, ScheduleStore};

pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 20)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

pub fn class(code: &str, time: &str, status: ClassStatus) -> ClassRecord {
    ClassRecord {
        code: code.to_string(),
        subject: format!("Subject {code}"),
        room: "101".to_string(),
        instructor: "Dr. Sattler".to_string(),
        time: time.to_string(),
        status,
    }
}

pub fn student(id: &str, name: &str) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        status: AttendanceStatus::Absent,
        attended_classes: Vec::new(),
    }
}

#[derive(Default)]
pub struct MemScheduleStore {
    classes: Mutex<Vec<ClassRecord>>,
    /// Number of batched status commits issued.
    pub status_commits: AtomicUsize,
}

impl MemScheduleStore {
    pub fn with_classes(classes: Vec<ClassRecord>) -> Self {
        Self {
            classes: Mutex::new(classes),
            status_commits: AtomicUsize::new(0),
        }
    }

    pub fn commit_count(&self) -> usize {
        self.status_commits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScheduleStore for MemScheduleStore {
    async fn list_classes(&self) -> Result<Vec<ClassRecord>> {
        Ok(self.classes.lock().unwrap().clone())
    }

    async fn get_class(&self, code: &str) -> Result<Option<ClassRecord>> {
        Ok(self
            .classes
            .lock()
            .unwrap()
            .iter()
            .find(|class| class.code == code)
            .cloned())
    }

    async fn insert_class(&self, record: &ClassRecord) -> Result<bool> {
        let mut classes = self.classes.lock().unwrap();
        if classes.iter().any(|class| class.code == record.code) {
            return Ok(false);
        }
        classes.push(record.clone());
        Ok(true)
    }

    async fn delete_class(&self, code: &str) -> Result<bool> {
        let mut classes = self.classes.lock().unwrap();
        let before = classes.len();
        classes.retain(|class| class.code != code);
        Ok(classes.len() < before)
    }

    async fn apply_status_changes(&self, changes: &[StatusChange]) -> Result<()> {
        self.status_commits.fetch_add(1, Ordering::SeqCst);

        let mut classes = self.classes.lock().unwrap();
        for change in changes {
            if let Some(class) = classes.iter_mut().find(|class| class.code == change.code) {
                class.status = change.status;
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemRosterStore {
    students: Mutex<Vec<(StudentRecord, String)>>,
    /// Number of successful bulk resets.
    pub resets: AtomicUsize,
    /// When set, `reset_all_statuses` fails until cleared.
    pub fail_resets: AtomicBool,
}

impl MemRosterStore {
    pub fn with_students(students: Vec<StudentRecord>) -> Self {
        Self {
            students: Mutex::new(
                students
                    .into_iter()
                    .map(|student| (student, "password".to_string()))
                    .collect(),
            ),
            resets: AtomicUsize::new(0),
            fail_resets: AtomicBool::new(false),
        }
    }

    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::SeqCst)
    }

    pub fn set_fail_resets(&self, fail: bool) {
        self.fail_resets.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl RosterStore for MemRosterStore {
    async fn list_students(&self) -> Result<Vec<StudentRecord>> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .map(|(student, _)| student.clone())
            .collect())
    }

    async fn get_student(&self, id: &str) -> Result<Option<StudentRecord>> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|(student, _)| student.id == id)
            .map(|(student, _)| student.clone()))
    }

    async fn insert_student(&self, record: &StudentRecord, password_hash: &str) -> Result<bool> {
        let mut students = self.students.lock().unwrap();
        if students.iter().any(|(student, _)| student.id == record.id) {
            return Ok(false);
        }
        students.push((record.clone(), password_hash.to_string()));
        Ok(true)
    }

    async fn verify_credentials(&self, id: &str, password: &str) -> Result<bool> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .any(|(student, stored)| student.id == id && stored == password))
    }

    async fn set_status(&self, id: &str, status: AttendanceStatus) -> Result<bool> {
        let mut students = self.students.lock().unwrap();
        match students.iter_mut().find(|(student, _)| student.id == id) {
            Some((student, _)) => {
                student.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn record_attendance(&self, id: &str, class_code: &str) -> Result<()> {
        let mut students = self.students.lock().unwrap();
        // Same referential rule as the Postgres schema: history rows only
        // exist for known students.
        let Some((student, _)) = students.iter_mut().find(|(student, _)| student.id == id) else {
            return Err(eyre!("student {id} violates attendance foreign key"));
        };
        if !student.attended_classes.iter().any(|code| code == class_code) {
            student.attended_classes.push(class_code.to_string());
        }
        Ok(())
    }

    async fn reset_all_statuses(&self) -> Result<u64> {
        if self.fail_resets.load(Ordering::SeqCst) {
            return Err(eyre!("simulated reset failure"));
        }

        let mut students = self.students.lock().unwrap();
        for (student, _) in students.iter_mut() {
            student.status = AttendanceStatus::Absent;
        }
        self.resets.fetch_add(1, Ordering::SeqCst);
        Ok(students.len() as u64)
    }
}
