//! Pure schedule evaluation.
//!
//! Given the stored class list and a probe instant, this module derives the
//! fresh status of every class and selects the current/next view the UI
//! consumes. It is deliberately free of I/O and engine state: the engine
//! crate feeds it store reads and persists whatever it reports as changed.

use chrono::NaiveDateTime;

use crate::clock::TimeRange;
use crate::errors::RollcallResult;
use crate::models::class::{ClassRecord, ClassStatus};

/// Derives the lifecycle state of a single class at `now`.
///
/// `InProgress` iff `start <= now < end`, `Completed` iff `now >= end`,
/// otherwise `Upcoming`. Exactly one state holds, and for a fixed range the
/// derivation is monotonic over the day.
pub fn derive_status(range: TimeRange, now: NaiveDateTime) -> ClassStatus {
    let (start, end) = range.anchor(now.date());

    if now >= end {
        ClassStatus::Completed
    } else if now >= start {
        ClassStatus::InProgress
    } else {
        ClassStatus::Upcoming
    }
}

/// A single status transition detected during an evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub code: String,
    pub status: ClassStatus,
}

/// The outcome of evaluating the whole schedule at one instant.
#[derive(Debug, Clone)]
pub struct EvaluationPlan {
    /// Every class with its fresh status, in stored order.
    pub classes: Vec<ClassRecord>,
    /// Only the records whose status actually changed; persisting just
    /// these avoids write amplification and spurious notifications.
    pub changes: Vec<StatusChange>,
    /// The active class: with an overlapping schedule, the earliest start
    /// wins, ties broken by stored order.
    pub current: Option<ClassRecord>,
    /// The upcoming class with the earliest start, ties by stored order.
    pub next: Option<ClassRecord>,
    /// All active codes whenever more than one class is simultaneously in
    /// progress; empty for a well-formed schedule.
    pub overlapping: Vec<String>,
}

/// Evaluates every stored class against `now`.
///
/// All time ranges are parsed up front so that a single malformed row fails
/// the pass loudly instead of yielding a half-evaluated schedule.
pub fn plan_evaluation(stored: &[ClassRecord], now: NaiveDateTime) -> RollcallResult<EvaluationPlan> {
    let ranges = stored
        .iter()
        .map(|record| TimeRange::parse(&record.time))
        .collect::<RollcallResult<Vec<_>>>()?;

    let mut classes = Vec::with_capacity(stored.len());
    let mut changes = Vec::new();

    for (record, range) in stored.iter().zip(&ranges) {
        let status = derive_status(*range, now);
        if status != record.status {
            changes.push(StatusChange {
                code: record.code.clone(),
                status,
            });
        }
        classes.push(ClassRecord {
            status,
            ..record.clone()
        });
    }

    let current = classes
        .iter()
        .zip(&ranges)
        .filter(|(class, _)| class.status == ClassStatus::InProgress)
        .min_by_key(|(_, range)| range.start)
        .map(|(class, _)| class.clone());

    let active_codes: Vec<String> = classes
        .iter()
        .filter(|class| class.status == ClassStatus::InProgress)
        .map(|class| class.code.clone())
        .collect();
    let overlapping = if active_codes.len() > 1 {
        active_codes
    } else {
        Vec::new()
    };

    let next = classes
        .iter()
        .zip(&ranges)
        .filter(|(class, _)| class.status == ClassStatus::Upcoming)
        .min_by_key(|(_, range)| range.start)
        .map(|(class, _)| class.clone());

    Ok(EvaluationPlan {
        classes,
        changes,
        current,
        next,
        overlapping,
    })
}
