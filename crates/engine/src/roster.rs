use std::sync::Arc;

use tokio::sync::watch;

use rollcall_core::errors::{RollcallError, RollcallResult};
use rollcall_core::models::class::ClassRecord;
use rollcall_core::models::student::{AttendanceStatus, ScanResponse, StudentRecord};
use rollcall_db::store::RosterStore;

/// Owns every mutation path into the roster collection and notifies
/// subscribers after each one.
///
/// Subscription contract: a new subscriber receives the current roster
/// immediately, then a fresh copy after every mutation, including ones
/// triggered externally such as a QR scan. Dropping the receiver
/// unsubscribes.
pub struct RosterService {
    store: Arc<dyn RosterStore>,
    tx: watch::Sender<Vec<StudentRecord>>,
}

impl RosterService {
    /// Builds the service and primes the channel with the stored roster.
    pub async fn new(store: Arc<dyn RosterStore>) -> RollcallResult<Self> {
        let roster = store.list_students().await.map_err(RollcallError::Database)?;
        let (tx, _rx) = watch::channel(roster);

        Ok(Self { store, tx })
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<StudentRecord>> {
        self.tx.subscribe()
    }

    /// Re-reads the roster and pushes it to all subscribers.
    async fn publish(&self) -> RollcallResult<Vec<StudentRecord>> {
        let roster = self
            .store
            .list_students()
            .await
            .map_err(RollcallError::Database)?;
        self.tx.send_replace(roster.clone());

        Ok(roster)
    }

    pub async fn roster(&self) -> RollcallResult<Vec<StudentRecord>> {
        self.store
            .list_students()
            .await
            .map_err(RollcallError::Database)
    }

    pub async fn get(&self, id: &str) -> RollcallResult<StudentRecord> {
        self.store
            .get_student(id)
            .await
            .map_err(RollcallError::Database)?
            .ok_or_else(|| RollcallError::NotFound(format!("Student with id {id} not found")))
    }

    /// Admits a new student, status forced to Absent.
    pub async fn add_student(
        &self,
        id: String,
        name: String,
        password_hash: String,
    ) -> RollcallResult<StudentRecord> {
        let record = StudentRecord {
            id,
            name,
            status: AttendanceStatus::Absent,
            attended_classes: Vec::new(),
        };

        let inserted = self
            .store
            .insert_student(&record, &password_hash)
            .await
            .map_err(RollcallError::Database)?;
        if !inserted {
            return Err(RollcallError::Conflict(format!(
                "Student with id {} already exists",
                record.id
            )));
        }

        tracing::info!(student = %record.id, "student added to roster");
        self.publish().await?;

        Ok(record)
    }

    /// Password check for student logins. A mismatch (or unknown id) is a
    /// `false` value, never an error.
    pub async fn verify_credentials(&self, id: &str, password: &str) -> RollcallResult<bool> {
        self.store
            .verify_credentials(id, password)
            .await
            .map_err(RollcallError::Database)
    }

    /// Marks a student present for the currently active class.
    ///
    /// The caller supplies the active class from a fresh schedule snapshot.
    /// The two rejection cases stay distinct: no class in progress at all
    /// versus a scanned code that does not match the active class.
    pub async fn mark_attendance(
        &self,
        student_id: &str,
        scanned_code: Option<&str>,
        active: Option<&ClassRecord>,
    ) -> RollcallResult<ScanResponse> {
        let active = active.ok_or(RollcallError::NoActiveClass)?;

        if let Some(code) = scanned_code {
            if code != active.code {
                return Err(RollcallError::ClassMismatch {
                    expected: active.code.clone(),
                    got: code.to_string(),
                });
            }
        }

        if self
            .store
            .get_student(student_id)
            .await
            .map_err(RollcallError::Database)?
            .is_none()
        {
            return Err(RollcallError::NotFound(format!(
                "Student with id {student_id} not found"
            )));
        }

        self.store
            .record_attendance(student_id, &active.code)
            .await
            .map_err(RollcallError::Database)?;
        self.store
            .set_status(student_id, AttendanceStatus::Present)
            .await
            .map_err(RollcallError::Database)?;

        tracing::info!(student = %student_id, class = %active.code, "attendance marked");

        let roster = self.publish().await?;
        let student = roster
            .into_iter()
            .find(|student| student.id == student_id)
            .ok_or_else(|| RollcallError::NotFound(format!("Student with id {student_id} not found")))?;

        Ok(ScanResponse {
            student,
            class_code: active.code.clone(),
        })
    }

    /// Manual staff override of a student's status. Marking Present with a
    /// class code also lands in the attendance history.
    pub async fn set_status(
        &self,
        student_id: &str,
        status: AttendanceStatus,
        class_code: Option<&str>,
    ) -> RollcallResult<StudentRecord> {
        // Existence first: a mistyped id must come back as NotFound, not as
        // the store rejecting the history insert.
        if self
            .store
            .get_student(student_id)
            .await
            .map_err(RollcallError::Database)?
            .is_none()
        {
            return Err(RollcallError::NotFound(format!(
                "Student with id {student_id} not found"
            )));
        }

        if let (AttendanceStatus::Present, Some(code)) = (status, class_code) {
            self.store
                .record_attendance(student_id, code)
                .await
                .map_err(RollcallError::Database)?;
        }

        let updated = self
            .store
            .set_status(student_id, status)
            .await
            .map_err(RollcallError::Database)?;
        if !updated {
            return Err(RollcallError::NotFound(format!(
                "Student with id {student_id} not found"
            )));
        }

        let roster = self.publish().await?;
        roster
            .into_iter()
            .find(|student| student.id == student_id)
            .ok_or_else(|| RollcallError::NotFound(format!("Student with id {student_id} not found")))
    }

    /// Sets the whole roster back to Absent. Runs as a single statement in
    /// the store, so readers never observe a half-reset roster.
    pub async fn reset_all_statuses(&self) -> RollcallResult<u64> {
        let count = self
            .store
            .reset_all_statuses()
            .await
            .map_err(RollcallError::Database)?;

        tracing::info!(students = count, "roster statuses reset to Absent");
        self.publish().await?;

        Ok(count)
    }
}
