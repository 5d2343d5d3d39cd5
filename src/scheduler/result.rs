//! Run result.

use serde::Serialize;

use super::RunMetrics;
use crate::dispatching::Policy;
use crate::models::ScheduledTask;

/// Outcome of one scheduling run: the timeline in dispatch order and its
/// metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    /// Policy that produced the order.
    pub policy: Policy,
    /// Timeline, in non-decreasing `start` order.
    pub schedule: Vec<ScheduledTask>,
    /// Summary statistics.
    pub metrics: RunMetrics,
}

impl RunResult {
    /// Builds a result, computing metrics from the timeline.
    pub fn new(policy: Policy, schedule: Vec<ScheduledTask>) -> Self {
        let metrics = RunMetrics::calculate(&schedule);
        Self {
            policy,
            schedule,
            metrics,
        }
    }

    #[inline]
    pub fn makespan(&self) -> u64 {
        self.metrics.makespan
    }

    #[inline]
    pub fn total_energy(&self) -> u64 {
        self.metrics.total_energy
    }

    #[inline]
    pub fn avg_power(&self) -> f64 {
        self.metrics.avg_power
    }

    /// Finds the entry for a task ID.
    pub fn task(&self, id: u64) -> Option<&ScheduledTask> {
        self.schedule.iter().find(|t| t.id() == id)
    }

    /// Task IDs in dispatch order.
    pub fn dispatch_order(&self) -> Vec<u64> {
        self.schedule.iter().map(|t| t.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use crate::scheduler::simulate;
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
    fn test_result_accessors() {
        let timeline = simulate(&[make_task(4, 0, 4, 2), make_task(9, 1, 2, 3)]);
        let result = RunResult::new(Policy::Fcfs, timeline);

        assert_eq!(result.len(), 2);
        assert_eq!(result.makespan(), 6);
        assert_eq!(result.total_energy(), 14);
        assert_eq!(result.dispatch_order(), vec![4, 9]);
        assert_eq!(result.task(9).unwrap().start(), 4);
        assert!(result.task(1).is_none());
    }

    #[test]
    fn test_result_empty() {
        let result = RunResult::new(Policy::EnergyAware, Vec::new());
        assert!(result.is_empty());
        assert_eq!(result.makespan(), 0);
        assert!((result.avg_power() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_result_serialize() {
        let result = RunResult::new(Policy::Fcfs, simulate(&[make_task(1, 0, 2, 3)]));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["policy"], "FCFS");
        assert_eq!(value["schedule"][0]["end"], 2);
        assert_eq!(value["metrics"]["total_energy"], 6);
    }
}
