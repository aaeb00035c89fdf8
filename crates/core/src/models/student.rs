use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RollcallError;

/// Attendance state of a student for the currently active class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = RollcallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(AttendanceStatus::Present),
            "Absent" => Ok(AttendanceStatus::Absent),
            other => Err(RollcallError::Validation(format!(
                "unknown attendance status {other:?}"
            ))),
        }
    }
}

/// A roster entry as exposed to consumers. Credential hashes never leave the
/// persistence layer; verification goes through the roster service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub status: AttendanceStatus,
    /// Class codes this student has ever been marked present for.
    /// Append-only history; reset never touches it, and codes survive
    /// deletion of the class itself.
    pub attended_classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub id: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStudentStatusRequest {
    pub status: AttendanceStatus,
    /// Active class code, supplied by staff UIs when marking Present so the
    /// mark lands in the attendance history.
    pub class_code: Option<String>,
}

/// QR scan payload: the decoded text is the student id; the class code is
/// optional and, when present, must match the currently active class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub student_id: String,
    pub class_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub student: StudentRecord,
    pub class_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginRole {
    Student,
    Staff,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: LoginRole,
    /// Required for student logins, ignored for staff.
    pub student_id: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub valid: bool,
    pub role: LoginRole,
}
