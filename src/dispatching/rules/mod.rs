//! Built-in dispatching rules.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `ArrivalTime` | arrival | FCFS, SJF, tie-breaker elsewhere |
//! | `BurstTime` | burst | SJF tie-breaker |
//! | `TaskPriority` | priority | Priority-Based |
//! | `PowerDraw` | power | Energy-Aware |
//!
//! # Score Convention
//! All rules return lower scores for tasks that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Task;

/// Earliest arrival first.
///
/// On a single machine with release times this is the FIFO/FCFS order.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalTime;

impl DispatchingRule for ArrivalTime {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.arrival().into()
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Shortest burst first.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct BurstTime;

impl DispatchingRule for BurstTime {
    fn name(&self) -> &'static str {
        "BURST"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.burst().into()
    }

    fn description(&self) -> &'static str {
        "Shortest Burst Time"
    }
}

/// Lowest priority value first (1 outranks 5).
#[derive(Debug, Clone, Copy)]
pub struct TaskPriority;

impl DispatchingRule for TaskPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.priority().into()
    }

    fn description(&self) -> &'static str {
        "Task Priority"
    }
}

/// Lowest power draw first.
#[derive(Debug, Clone, Copy)]
pub struct PowerDraw;

impl DispatchingRule for PowerDraw {
    fn name(&self) -> &'static str {
        "POWER"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.power().into()
    }

    fn description(&self) -> &'static str {
        "Lowest Power Draw"
    }
}
