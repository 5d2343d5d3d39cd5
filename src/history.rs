//! Bounded history of scheduled tasks.
//!
//! A FIFO ring of the most recent [`ScheduledTask`]s across runs. Appends go
//! to the tail; once the capacity is exceeded the oldest entries are dropped
//! from the head without error.

use std::collections::VecDeque;
use tracing::debug;

use crate::models::ScheduledTask;

/// Default number of retained entries.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Capacity-bounded, append-only log of scheduled tasks.
///
/// Entries are stored by value and never mutated after insertion.
///
/// # Example
/// ```
/// use std::num::NonZeroU64;
/// use u_energy_schedule::history::HistoryLog;
/// use u_energy_schedule::models::Task;
/// use u_energy_schedule::scheduler::simulate;
///
/// let nz = |v| NonZeroU64::new(v).unwrap();
/// let mut log = HistoryLog::new(2);
/// for id in 1..=3 {
///     log.record(&simulate(&[Task::new(nz(id), 0, nz(1), 1)]));
/// }
/// let ids: Vec<u64> = log.snapshot().iter().map(|t| t.id()).collect();
/// assert_eq!(ids, vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<ScheduledTask>,
    capacity: usize,
}

impl HistoryLog {
    /// Creates an empty log. A capacity of 0 retains nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Appends a run's timeline in order, evicting the oldest entries
    /// until the log fits its capacity.
    pub fn record(&mut self, timeline: &[ScheduledTask]) {
        // Only the newest `capacity` entries of this batch can survive.
        let skip = timeline.len().saturating_sub(self.capacity);
        let incoming = timeline.len() - skip;
        let overflow = (self.entries.len() + incoming).saturating_sub(self.capacity);
        self.entries.drain(..overflow);
        self.entries.extend(timeline[skip..].iter().cloned());

        let evicted = overflow + skip;
        if evicted > 0 {
            debug!(evicted, retained = self.entries.len(), "history evicted oldest entries");
        }
    }

    /// Retained entries, most-recent-last.
    pub fn snapshot(&self) -> Vec<ScheduledTask> {
        self.entries.iter().cloned().collect()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
