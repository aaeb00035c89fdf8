use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use rollcall_core::errors::RollcallResult;
use rollcall_core::models::class::ClassRecord;
use rollcall_core::models::student::StudentRecord;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudent {
    pub id: String,
    pub name: String,
    pub password_hash: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbStudent {
    /// Converts a row into the domain record, attaching the attendance
    /// history codes. The credential hash stays behind.
    pub fn into_record(self, attended_classes: Vec<String>) -> RollcallResult<StudentRecord> {
        Ok(StudentRecord {
            id: self.id,
            name: self.name,
            status: self.status.parse()?,
            attended_classes,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClass {
    pub code: String,
    pub subject: String,
    pub room: String,
    pub instructor: String,
    pub meeting_time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbClass {
    pub fn into_record(self) -> RollcallResult<ClassRecord> {
        Ok(ClassRecord {
            code: self.code,
            subject: self.subject,
            room: self.room,
            instructor: self.instructor,
            time: self.meeting_time,
            status: self.status.parse()?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttendanceMark {
    pub student_id: String,
    pub class_code: String,
    pub marked_at: DateTime<Utc>,
}
