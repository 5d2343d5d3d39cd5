//! Task model.
//!
//! A task is one independent, non-preemptible unit of work dispatched onto
//! the single processing resource.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

/// Priority assigned to tasks that do not specify one.
pub const DEFAULT_PRIORITY: i64 = 1;

/// A validated task.
///
/// Fields are private: a `Task` is immutable once constructed. Batches of
/// caller input are turned into tasks by [`crate::validation::validate_tasks`];
/// callers holding typed values can build one directly with [`Task::new`].
///
/// # Time Representation
/// Times are abstract integer time units relative to t=0.
/// Energy is `burst × power`, an abstract cost metric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    id: NonZeroU64,
    arrival: u64,
    burst: NonZeroU64,
    power: u64,
    priority: i64,
}

impl Task {
    /// Creates a task with the default priority.
    pub fn new(id: NonZeroU64, arrival: u64, burst: NonZeroU64, power: u64) -> Self {
        Self {
            id,
            arrival,
            burst,
            power,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the priority (lower value = dispatched earlier under
    /// priority-based ordering).
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Task identifier, unique within its batch.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id.get()
    }

    /// Earliest time the task may start.
    #[inline]
    pub fn arrival(&self) -> u64 {
        self.arrival
    }

    /// Uninterrupted processing duration.
    #[inline]
    pub fn burst(&self) -> u64 {
        self.burst.get()
    }

    /// Power draw while running.
    #[inline]
    pub fn power(&self) -> u64 {
        self.power
    }

    #[inline]
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Energy consumed by running this task to completion (`burst × power`).
    ///
    /// Saturates at `u64::MAX`; validated batches never get there.
    #[inline]
    pub fn energy(&self) -> u64 {
        self.burst().saturating_mul(self.power)
    }

    /// Earliest possible completion time (`arrival + burst`).
    #[inline]
    pub fn earliest_end(&self) -> u64 {
        self.arrival.saturating_add(self.burst())
    }
}
