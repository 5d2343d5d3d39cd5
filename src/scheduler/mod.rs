//! Timeline simulation, run metrics, and the scheduler engine.
//!
//! # Algorithm
//!
//! `simulate` dispatches an ordered task sequence onto one non-preemptive
//! resource with a greedy, single-pass rule: each task starts at the later
//! of its arrival and the previous completion. It never fails.
//!
//! # Metrics
//!
//! `RunMetrics` computes makespan, total energy, average power,
//! utilization, and waiting/turnaround times from a finished timeline.
//!
//! # Engine
//!
//! `SchedulerEngine` chains validation, ordering, simulation, and metrics,
//! and keeps the bounded run history.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod engine;
mod kpi;
mod result;
mod timeline;

pub use engine::SchedulerEngine;
pub use kpi::RunMetrics;
pub use result::RunResult;
pub use timeline::simulate;
