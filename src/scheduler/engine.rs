//! Scheduler engine: the entry point of a run.
//!
//! # Pipeline
//!
//! 1. Validate raw records into tasks.
//! 2. Resolve the policy identifier.
//! 3. Order tasks by the policy (stable).
//! 4. Simulate the single-resource timeline.
//! 5. Aggregate metrics.
//! 6. Append the timeline to the history log.
//!
//! Steps 1 and 2 fail fast; nothing after them can fail. A rejected run
//! leaves the history untouched.

use std::sync::{Mutex, MutexGuard};
use tracing::{info, warn};

use super::{simulate, RunResult};
use crate::config::SchedulerConfig;
use crate::dispatching::Policy;
use crate::error::ScheduleError;
use crate::history::HistoryLog;
use crate::models::{RawTaskRecord, ScheduledTask, Task};
use crate::validation::validate_tasks;

/// Owns the run history shared across scheduling calls.
///
/// All per-run data flows through parameters and the returned
/// [`RunResult`]; the history log is the only state. It sits behind a
/// mutex, so concurrent runs on a shared engine append their timelines
/// as contiguous blocks.
///
/// # Example
///
/// ```
/// use u_energy_schedule::models::RawTaskRecord;
/// use u_energy_schedule::scheduler::SchedulerEngine;
///
/// let engine = SchedulerEngine::default();
/// let tasks = vec![RawTaskRecord::new(0, 4, 2), RawTaskRecord::new(1, 2, 3)];
///
/// let result = engine.schedule(&tasks, "FCFS").unwrap();
/// assert_eq!(result.makespan(), 6);
/// assert_eq!(result.total_energy(), 14);
/// assert_eq!(engine.history().len(), 2);
///
/// assert!(engine.schedule(&tasks, "Nonexistent").is_err());
/// assert_eq!(engine.history().len(), 2);
/// ```
#[derive(Debug)]
pub struct SchedulerEngine {
    history: Mutex<HistoryLog>,
}

impl SchedulerEngine {
    /// Creates an engine with an empty history.
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            history: Mutex::new(HistoryLog::new(config.history_capacity)),
        }
    }

    /// Validates, orders, simulates, and records a batch.
    ///
    /// `policy` is parsed with [`Policy::from_str`](std::str::FromStr).
    pub fn schedule(
        &self,
        records: &[RawTaskRecord],
        policy: &str,
    ) -> Result<RunResult, ScheduleError> {
        let tasks =
            validate_tasks(records).inspect_err(|e| warn!(error = %e, "rejected task set"))?;
        let policy: Policy = policy
            .parse()
            .inspect_err(|e| warn!(error = %e, "rejected policy"))?;
        Ok(self.run(tasks, policy))
    }

    /// Like [`schedule`](Self::schedule) with an already-resolved policy.
    pub fn schedule_with_policy(
        &self,
        records: &[RawTaskRecord],
        policy: Policy,
    ) -> Result<RunResult, ScheduleError> {
        let tasks =
            validate_tasks(records).inspect_err(|e| warn!(error = %e, "rejected task set"))?;
        Ok(self.run(tasks, policy))
    }

    /// Runs already-validated tasks. Cannot fail.
    ///
    /// Task IDs are not re-checked for uniqueness here; batches from
    /// [`validate_tasks`] already satisfy it.
    pub fn run(&self, tasks: Vec<Task>, policy: Policy) -> RunResult {
        let ordered = policy.order(&tasks);
        let timeline = simulate(&ordered);
        let result = RunResult::new(policy, timeline);

        self.lock_history().record(&result.schedule);

        info!(
            policy = %policy,
            tasks = result.len(),
            makespan = result.makespan(),
            total_energy = result.total_energy(),
            avg_power = result.avg_power(),
            "scheduling run complete"
        );
        result
    }

    /// Snapshot of the retained history, most-recent-last.
    pub fn history(&self) -> Vec<ScheduledTask> {
        self.lock_history().snapshot()
    }

    /// History capacity.
    pub fn history_capacity(&self) -> usize {
        self.lock_history().capacity()
    }

    /// Empties the history.
    pub fn clear_history(&self) {
        self.lock_history().clear();
    }

    fn lock_history(&self) -> MutexGuard<'_, HistoryLog> {
        // Each record() is a complete drain+extend on owned values; a
        // panic elsewhere cannot leave the log half-written.
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SchedulerEngine {
    fn default() -> Self {
        Self::new(&SchedulerConfig::default())
    }
}
