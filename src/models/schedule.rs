//! Scheduled task (timeline entry) model.
//!
//! A scheduled task records when a task ran on the single resource and the
//! energy it consumed.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::Serialize;

use super::Task;

/// A task placed on the timeline.
///
/// # Invariants
/// - `start >= task.arrival()`
/// - `end == start + task.burst()`
/// - `energy == task.burst() * task.power()`
///
/// Only the timeline simulator constructs these, so the invariants hold for
/// every value in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledTask {
    #[serde(flatten)]
    task: Task,
    start: u64,
    end: u64,
    energy: u64,
}

impl ScheduledTask {
    pub(crate) fn new(task: Task, start: u64) -> Self {
        let end = start.saturating_add(task.burst());
        let energy = task.energy();
        Self {
            task,
            start,
            end,
            energy,
        }
    }

    /// The underlying task.
    #[inline]
    pub fn task(&self) -> &Task {
        &self.task
    }

    #[inline]
    pub fn id(&self) -> u64 {
        self.task.id()
    }

    /// Dispatch time.
    #[inline]
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Completion time.
    #[inline]
    pub fn end(&self) -> u64 {
        self.end
    }

    /// Energy consumed (`burst × power`).
    #[inline]
    pub fn energy(&self) -> u64 {
        self.energy
    }

    /// Time spent waiting after arrival (`start - arrival`).
    #[inline]
    pub fn waiting_time(&self) -> u64 {
        self.start - self.task.arrival()
    }

    /// Time from arrival to completion (`end - arrival`).
    #[inline]
    pub fn turnaround_time(&self) -> u64 {
        self.end - self.task.arrival()
    }

    /// Whether the half-open intervals `[start, end)` of two entries intersect.
    pub fn overlaps(&self, other: &ScheduledTask) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU64;

    fn make_task(id: u64, arrival: u64, burst: u64, power: u64) -> Task {
        Task::new(
            NonZeroU64::new(id).unwrap(),
            arrival,
            NonZeroU64::new(burst).unwrap(),
            power,
        )
    }

    #[test]
    fn test_scheduled_task_derived_fields() {
        let st = ScheduledTask::new(make_task(1, 2, 4, 3), 5);
        assert_eq!(st.id(), 1);
        assert_eq!(st.start(), 5);
        assert_eq!(st.end(), 9);
        assert_eq!(st.energy(), 12);
        assert_eq!(st.waiting_time(), 3);
        assert_eq!(st.turnaround_time(), 7);
    }

    #[test]
    fn test_overlaps() {
        let a = ScheduledTask::new(make_task(1, 0, 4, 1), 0); // [0, 4)
        let b = ScheduledTask::new(make_task(2, 0, 2, 1), 4); // [4, 6)
        let c = ScheduledTask::new(make_task(3, 0, 2, 1), 3); // [3, 5)

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_serialize_flat() {
        let st = ScheduledTask::new(make_task(1, 0, 4, 2), 0);
        let value = serde_json::to_value(&st).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["burst"], 4);
        assert_eq!(value["start"], 0);
        assert_eq!(value["end"], 4);
        assert_eq!(value["energy"], 8);
    }
}
