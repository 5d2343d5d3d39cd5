//! Run metrics.
//!
//! Derives summary statistics from a completed timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time, 0 if empty |
//! | Total Energy | Σ burst × power |
//! | Average Power | total energy / makespan, 0 if makespan is 0 |
//! | Peak Power | Largest single-task power draw |
//! | Busy / Idle Time | Σ burst, makespan − busy |
//! | Utilization | busy / makespan |
//! | Avg Waiting Time | mean(start − arrival) |
//! | Avg Turnaround Time | mean(end − arrival) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::Serialize;

use crate::models::ScheduledTask;

/// Summary statistics of one run.
///
/// Times are in the same abstract units as the tasks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunMetrics {
    /// Latest completion time.
    pub makespan: u64,
    /// Sum of per-task energy.
    pub total_energy: u64,
    /// `total_energy / makespan` (0 when makespan is 0).
    pub avg_power: f64,
    /// Largest power draw of any task.
    pub peak_power: u64,
    /// Time the resource spent running tasks.
    pub busy_time: u64,
    /// Time the resource sat idle before the makespan.
    pub idle_time: u64,
    /// `busy_time / makespan` (0.0..=1.0).
    pub utilization: f64,
    /// Mean of `start - arrival`.
    pub avg_waiting_time: f64,
    /// Mean of `end - arrival`.
    pub avg_turnaround_time: f64,
}

impl RunMetrics {
    /// Computes metrics over a timeline.
    ///
    /// Total over any input, including the empty timeline (all zeros).
    pub fn calculate(timeline: &[ScheduledTask]) -> Self {
        if timeline.is_empty() {
            return Self::default();
        }

        let makespan = timeline.iter().map(|t| t.end()).max().unwrap_or(0);
        let mut total_energy: u64 = 0;
        let mut busy_time: u64 = 0;
        let mut peak_power: u64 = 0;
        let mut total_waiting: f64 = 0.0;
        let mut total_turnaround: f64 = 0.0;

        for st in timeline {
            total_energy = total_energy.saturating_add(st.energy());
            busy_time = busy_time.saturating_add(st.task().burst());
            peak_power = peak_power.max(st.task().power());
            total_waiting += st.waiting_time() as f64;
            total_turnaround += st.turnaround_time() as f64;
        }

        let (avg_power, utilization) = if makespan > 0 {
            (
                total_energy as f64 / makespan as f64,
                busy_time as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let count = timeline.len() as f64;
        Self {
            makespan,
            total_energy,
            avg_power,
            peak_power,
            busy_time,
            idle_time: makespan.saturating_sub(busy_time),
            utilization,
            avg_waiting_time: total_waiting / count,
            avg_turnaround_time: total_turnaround / count,
        }
    }
}
