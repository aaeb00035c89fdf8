use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use rollcall_core::clock::TimeRange;
use rollcall_core::errors::{RollcallError, RollcallResult};
use rollcall_core::lifecycle::plan_evaluation;
use rollcall_core::models::class::{ClassRecord, ClassStatus, CreateClassRequest};
use rollcall_core::models::schedule::ScheduleSnapshot;
use rollcall_db::store::ScheduleStore;

use crate::roster::RosterService;

#[derive(Default)]
struct EngineState {
    /// The class we last saw in progress. Held here rather than re-derived
    /// from the store, so a multi-record status commit cannot race the
    /// transition detection.
    previously_active: Option<String>,
    seeded: bool,
}

/// Keeps every class's status consistent with the wall clock and owns the
/// one cascade in the system: when a different class becomes active, the
/// whole roster is reset to Absent.
///
/// All schedule writes go through this engine; administrative add/remove
/// also re-evaluates so subscribers always see a coherent snapshot.
pub struct LifecycleEngine {
    schedule: Arc<dyn ScheduleStore>,
    roster: Arc<RosterService>,
    state: Mutex<EngineState>,
    tx: watch::Sender<ScheduleSnapshot>,
}

impl LifecycleEngine {
    pub fn new(schedule: Arc<dyn ScheduleStore>, roster: Arc<RosterService>) -> Self {
        let (tx, _rx) = watch::channel(ScheduleSnapshot::default());

        Self {
            schedule,
            roster,
            state: Mutex::new(EngineState::default()),
            tx,
        }
    }

    /// Subscribers get the latest snapshot immediately, then every
    /// published change, in evaluation order. Dropping the receiver
    /// unsubscribes.
    pub fn subscribe(&self) -> watch::Receiver<ScheduleSnapshot> {
        self.tx.subscribe()
    }

    /// The most recently published snapshot, without touching the store.
    pub fn snapshot(&self) -> ScheduleSnapshot {
        self.tx.borrow().clone()
    }

    /// Re-evaluates against the host's local clock and always notifies.
    /// Used by consumers that need a guaranteed-fresh view.
    pub async fn refresh(&self) -> RollcallResult<ScheduleSnapshot> {
        self.reevaluate_at(Local::now().naive_local(), true).await
    }

    /// Periodic re-evaluation; notifies only when something changed.
    pub async fn tick(&self) -> RollcallResult<ScheduleSnapshot> {
        self.reevaluate_at(Local::now().naive_local(), false).await
    }

    /// One full evaluation pass at `now`.
    ///
    /// The state lock doubles as a re-entrancy guard: a slow store
    /// round-trip can never overlap a second evaluation, it just queues it.
    pub async fn reevaluate_at(
        &self,
        now: NaiveDateTime,
        force: bool,
    ) -> RollcallResult<ScheduleSnapshot> {
        let mut state = self.state.lock().await;

        let stored = self
            .schedule
            .list_classes()
            .await
            .map_err(RollcallError::Database)?;

        if !state.seeded {
            // After a restart, adopt whatever the store already recorded as
            // active so a class in mid-session does not re-trigger a reset.
            state.previously_active = stored
                .iter()
                .find(|class| class.status == ClassStatus::InProgress)
                .map(|class| class.code.clone());
            state.seeded = true;
        }

        let plan = plan_evaluation(&stored, now)?;
        let changed = !plan.changes.is_empty();

        if changed {
            self.schedule
                .apply_status_changes(&plan.changes)
                .await
                .map_err(RollcallError::Database)?;
            debug!(changes = plan.changes.len(), "class statuses persisted");
        }

        if !plan.overlapping.is_empty() {
            warn!(
                codes = ?plan.overlapping,
                "multiple classes simultaneously in progress; the schedule needs attention"
            );
        }

        let newly_active = plan.current.as_ref().map(|class| class.code.clone());
        let transition = match (&newly_active, &state.previously_active) {
            (Some(new), Some(prev)) => new != prev,
            (Some(_), None) => true,
            (None, _) => false,
        };

        let mut reset_error = self.tx.borrow().reset_error.clone();
        let mut did_reset = false;

        if transition {
            // `transition` implies a newly active code exists
            if let Some(code) = newly_active.as_ref() {
                info!(class = %code, "new class in progress; resetting roster statuses");

                match self.roster.reset_all_statuses().await {
                    Ok(_) => {
                        state.previously_active = Some(code.clone());
                        reset_error = None;
                        did_reset = true;
                    }
                    Err(err) => {
                        // previously_active stays untouched: the next tick
                        // re-detects the transition and retries the reset.
                        error!(error = %err, "roster reset failed");

                        let snapshot = ScheduleSnapshot {
                            classes: plan.classes,
                            current: plan.current,
                            next: plan.next,
                            overlapping: plan.overlapping,
                            reset_error: Some(err.to_string()),
                        };
                        self.tx.send_replace(snapshot);

                        return Err(err);
                    }
                }
            }
        }

        let snapshot = ScheduleSnapshot {
            classes: plan.classes,
            current: plan.current,
            next: plan.next,
            overlapping: plan.overlapping,
            reset_error,
        };

        if force || changed || did_reset {
            self.tx.send_replace(snapshot.clone());
        }

        Ok(snapshot)
    }

    /// Admits a new class. The time string is validated by parsing so the
    /// store never holds a range the evaluator cannot read; status is
    /// forced to Upcoming and corrected by the evaluation that follows.
    pub async fn add_class(&self, req: CreateClassRequest) -> RollcallResult<ClassRecord> {
        TimeRange::parse(&req.time)?;

        let record = ClassRecord {
            code: req.code,
            subject: req.subject,
            room: req.room,
            instructor: req.instructor,
            time: req.time,
            status: ClassStatus::Upcoming,
        };

        let inserted = self
            .schedule
            .insert_class(&record)
            .await
            .map_err(RollcallError::Database)?;
        if !inserted {
            return Err(RollcallError::Conflict(format!(
                "Class with code {} already exists",
                record.code
            )));
        }

        info!(class = %record.code, "class added to schedule");

        let snapshot = self.refresh().await?;
        Ok(snapshot
            .classes
            .iter()
            .find(|class| class.code == record.code)
            .cloned()
            .unwrap_or(record))
    }

    /// Removes a class from the schedule. Attendance history keeps the
    /// code: it is an append-only record, not a foreign key.
    pub async fn remove_class(&self, code: &str) -> RollcallResult<()> {
        let deleted = self
            .schedule
            .delete_class(code)
            .await
            .map_err(RollcallError::Database)?;
        if !deleted {
            return Err(RollcallError::NotFound(format!(
                "Class with code {code} not found"
            )));
        }

        info!(class = %code, "class removed from schedule");
        self.refresh().await?;

        Ok(())
    }

    /// Starts the periodic evaluation task. Evaluation errors are logged
    /// and the loop keeps running; `reevaluate_at` is idempotent, so the
    /// next tick retries whatever failed. Abort the handle on shutdown.
    pub fn spawn_periodic(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let engine = Arc::clone(self);

        tokio::spawn(async move {
            info!(interval = ?every, "starting schedule evaluation timer");

            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                if let Err(err) = engine.tick().await {
                    warn!(error = %err, "periodic schedule evaluation failed");
                }
            }
        })
    }
}
