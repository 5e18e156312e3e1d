use super::status::ExecStatus;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Mock task executor: runs at most one task at a time and simulates a
/// continuously decaying battery.
///
/// A task "runs" by letting wall-clock time pass; completion is detected
/// lazily on the next status poll rather than by a background timer. Every
/// time-sensitive operation has an `*_at(now)` form so tests can drive the
/// clock explicitly; the plain forms capture `Instant::now()`.
pub struct TaskExecutor {
    task_in_exec: Option<String>,
    task_start_time: Instant,
    last_charge_time: Instant,
    exec_times: HashMap<String, Duration>,
    battery_decay_per_sec: f64,
}

impl TaskExecutor {
    pub fn new(exec_times: HashMap<String, Duration>, battery_decay_per_sec: f64) -> Self {
        Self::new_at(exec_times, battery_decay_per_sec, Instant::now())
    }

    /// Creates an executor whose battery reference time is `now`.
    pub fn new_at(
        exec_times: HashMap<String, Duration>,
        battery_decay_per_sec: f64,
        now: Instant,
    ) -> Self {
        Self {
            task_in_exec: None,
            task_start_time: now,
            last_charge_time: now,
            exec_times,
            battery_decay_per_sec,
        }
    }

    /// Accepts `task_id` for execution, unless another task is still running.
    ///
    /// Unknown task ids are not rejected; they resolve to a zero expected
    /// duration and complete on the first poll.
    pub fn execute(&mut self, task_id: &str) -> ExecStatus {
        self.execute_at(task_id, Instant::now())
    }

    pub fn execute_at(&mut self, task_id: &str, now: Instant) -> ExecStatus {
        if !self.task_is_done(now) {
            warn!(
                "Rejecting task \"{}\": task \"{}\" is still running",
                task_id,
                self.task_in_exec.as_deref().unwrap_or_default()
            );
            return ExecStatus::CompletedError;
        }

        info!(
            "Starting task \"{}\" (expected duration: {:?})",
            task_id,
            self.expected_duration(task_id)
        );
        self.task_in_exec = Some(task_id.to_string());
        self.task_start_time = now;
        ExecStatus::CompletedInProgress
    }

    /// Reports the status of `task_id`.
    ///
    /// A mismatch against the tracked task (including when nothing is
    /// running) signals caller-identity error, not task failure. When the
    /// tracked task's time has elapsed, this poll clears it and returns
    /// success; that clearing is the only transition back to idle, so
    /// exactly one poll observes the success.
    pub fn get_task_status(&mut self, task_id: &str) -> ExecStatus {
        self.get_task_status_at(task_id, Instant::now())
    }

    pub fn get_task_status_at(&mut self, task_id: &str, now: Instant) -> ExecStatus {
        if self.task_in_exec.as_deref() != Some(task_id) {
            warn!(
                "Status poll for \"{}\" but the current task is \"{}\"",
                task_id,
                self.task_in_exec.as_deref().unwrap_or_default()
            );
            return ExecStatus::CompletedError;
        }

        if self.task_is_done(now) {
            info!("Task \"{}\" completed", task_id);
            self.task_in_exec = None;
            ExecStatus::CompletedSuccess
        } else {
            debug!("Task \"{}\" still in progress", task_id);
            ExecStatus::CompletedInProgress
        }
    }

    /// Remaining battery charge in `[0.0, 1.0]`: linear decay since the last
    /// charge time, floored at zero. There is no recharge path.
    pub fn battery_charge(&self) -> f64 {
        self.battery_charge_at(Instant::now())
    }

    pub fn battery_charge_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.last_charge_time);
        (1.0 - self.battery_decay_per_sec * elapsed.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Human-readable state projection; agrees with `get_task_status` by
    /// sharing the same done predicate.
    pub fn print_state(&self) -> String {
        self.print_state_at(Instant::now())
    }

    pub fn print_state_at(&self, now: Instant) -> String {
        if self.task_is_done(now) {
            "Idle.".to_string()
        } else {
            format!(
                "Executing {}.",
                self.task_in_exec.as_deref().unwrap_or_default()
            )
        }
    }

    // Done iff nothing is tracked or the tracked task outlived its table
    // entry. Elapsed time equal to the entry still counts as in progress.
    fn task_is_done(&self, now: Instant) -> bool {
        match &self.task_in_exec {
            None => true,
            Some(task) => {
                now.saturating_duration_since(self.task_start_time) > self.expected_duration(task)
            }
        }
    }

    fn expected_duration(&self, task_id: &str) -> Duration {
        self.exec_times
            .get(task_id)
            .copied()
            .unwrap_or(Duration::ZERO)
    }
}
