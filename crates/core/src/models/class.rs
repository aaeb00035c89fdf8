use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RollcallError;

/// Lifecycle state of a class, derived from wall-clock time.
///
/// The wire (and stored) strings are the display forms:
/// `"Upcoming"`, `"In Progress"`, `"Completed"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassStatus {
    Upcoming,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ClassStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassStatus::Upcoming => "Upcoming",
            ClassStatus::InProgress => "In Progress",
            ClassStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassStatus {
    type Err = RollcallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Upcoming" => Ok(ClassStatus::Upcoming),
            "In Progress" => Ok(ClassStatus::InProgress),
            "Completed" => Ok(ClassStatus::Completed),
            other => Err(RollcallError::Validation(format!(
                "unknown class status {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub code: String,
    pub subject: String,
    pub room: String,
    pub instructor: String,
    /// Stored meeting window, e.g. `"09:00 AM - 10:00 AM"`; validated by
    /// parsing at admission time.
    pub time: String,
    pub status: ClassStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassRequest {
    pub code: String,
    pub subject: String,
    pub room: String,
    pub instructor: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteClassResponse {
    pub code: String,
    pub deleted: bool,
}
