use serde::{Deserialize, Serialize};

use crate::models::class::ClassRecord;

/// The consumer-facing view of the schedule after an evaluation pass.
///
/// Published on the lifecycle engine's watch channel: subscribers receive the
/// latest snapshot immediately on subscribe and again after every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    /// All classes in insertion order, statuses fresh as of the evaluation.
    pub classes: Vec<ClassRecord>,
    /// The class currently in progress, if any. With an overlapping
    /// schedule this is the earliest-starting active class.
    pub current: Option<ClassRecord>,
    /// The upcoming class with the earliest start time.
    pub next: Option<ClassRecord>,
    /// Codes of every simultaneously active class when the schedule
    /// overlaps. More than one entry is a schedule misconfiguration the
    /// administrator needs to fix.
    pub overlapping: Vec<String>,
    /// Failure message from the most recent roster reset attempt, cleared
    /// once a reset succeeds. Surfaced so the staff UI never trusts a
    /// "who is present" view silently built on a failed reset.
    pub reset_error: Option<String>,
}
