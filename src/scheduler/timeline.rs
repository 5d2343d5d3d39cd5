//! Single-resource, non-preemptive timeline simulation.
//!
//! # Algorithm
//!
//! 1. `completion_time = 0`
//! 2. For each task in dispatch order:
//!    `start = max(completion_time, arrival)`, `end = start + burst`,
//!    `energy = burst × power`, `completion_time = end`.
//!
//! Greedy and single-pass: no lookahead, no backtracking. Intervals cannot
//! overlap because each start is at least the previous end.
//!
//! # Complexity
//! O(n); the surrounding run is dominated by the O(n log n) ordering.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 3: Single Machine Models

use tracing::debug;

use crate::models::{ScheduledTask, Task};

/// Dispatches `ordered` tasks onto the single resource.
///
/// Never fails: an empty input yields an empty timeline. Arithmetic
/// saturates at `u64::MAX`, a bound validated batches cannot reach.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU64;
/// use u_energy_schedule::models::Task;
/// use u_energy_schedule::scheduler::simulate;
///
/// let nz = |v| NonZeroU64::new(v).unwrap();
/// let tasks = vec![Task::new(nz(1), 0, nz(4), 2), Task::new(nz(2), 1, nz(2), 3)];
///
/// let timeline = simulate(&tasks);
/// assert_eq!((timeline[0].start(), timeline[0].end()), (0, 4));
/// assert_eq!((timeline[1].start(), timeline[1].end()), (4, 6));
/// ```
pub fn simulate(ordered: &[Task]) -> Vec<ScheduledTask> {
    let mut timeline = Vec::with_capacity(ordered.len());
    let mut completion_time: u64 = 0;

    for task in ordered {
        let start = completion_time.max(task.arrival());
        let scheduled = ScheduledTask::new(task.clone(), start);
        completion_time = scheduled.end();

        debug!(
            task_id = scheduled.id(),
            start = scheduled.start(),
            end = scheduled.end(),
            energy = scheduled.energy(),
            "dispatched task"
        );
        timeline.push(scheduled);
    }

    timeline
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
    fn test_single_task() {
        let timeline = simulate(&[make_task(1, 3, 4, 2)]);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].start(), 3);
        assert_eq!(timeline[0].end(), 7);
        assert_eq!(timeline[0].energy(), 8);
    }

    #[test]
    fn test_back_to_back() {
        let timeline = simulate(&[make_task(1, 0, 4, 2), make_task(2, 1, 2, 3)]);
        assert_eq!(timeline[0].start(), 0);
        assert_eq!(timeline[0].end(), 4);
        assert_eq!(timeline[0].energy(), 8);
        // Arrived at 1 but the resource is busy until 4
        assert_eq!(timeline[1].start(), 4);
        assert_eq!(timeline[1].end(), 6);
        assert_eq!(timeline[1].energy(), 6);
        assert_eq!(timeline[1].waiting_time(), 3);
    }

    #[test]
    fn test_idle_gap() {
        let timeline = simulate(&[make_task(1, 0, 2, 1), make_task(2, 10, 3, 1)]);
        // Resource idles from 2 to 10
        assert_eq!(timeline[1].start(), 10);
        assert_eq!(timeline[1].end(), 13);
    }

    #[test]
    fn test_order_is_respected() {
        // Late arrival first: the early task waits behind it.
        let timeline = simulate(&[make_task(1, 5, 2, 1), make_task(2, 0, 1, 1)]);
        assert_eq!(timeline[0].id(), 1);
        assert_eq!(timeline[0].start(), 5);
        assert_eq!(timeline[1].id(), 2);
        assert_eq!(timeline[1].start(), 7);
    }

    #[test]
    fn test_no_overlap_and_sorted() {
        let tasks = vec![
            make_task(1, 4, 3, 1),
            make_task(2, 0, 5, 2),
            make_task(3, 2, 1, 3),
            make_task(4, 20, 2, 0),
        ];
        let timeline = simulate(&tasks);

        for pair in timeline.windows(2) {
            assert!(pair[0].start() <= pair[1].start());
            assert!(pair[0].end() <= pair[1].start());
            assert!(!pair[0].overlaps(&pair[1]));
        }
        for st in &timeline {
            assert!(st.start() >= st.task().arrival());
            assert_eq!(st.end(), st.start() + st.task().burst());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(simulate(&[]).is_empty());
    }
}
