//! Named ordering policies.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{rules, RuleEngine};
use crate::error::UnsupportedPolicyError;
use crate::models::Task;

const ROUND_ROBIN_REASON: &str =
    "time-sliced round robin requires preemption, which single-resource non-preemptive dispatch does not provide";

/// A selectable ordering policy.
///
/// | Policy | Primary key | Secondary key |
/// |--------|-------------|---------------|
/// | `Fcfs` | arrival | input order |
/// | `ShortestJobFirst` | arrival | burst |
/// | `PriorityBased` | priority (ascending) | arrival |
/// | `EnergyAware` | power (ascending) | arrival |
///
/// Remaining ties keep input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    #[serde(rename = "FCFS")]
    Fcfs,
    #[serde(rename = "Shortest Job First")]
    ShortestJobFirst,
    #[serde(rename = "Priority-Based")]
    PriorityBased,
    #[serde(rename = "Energy-Aware")]
    EnergyAware,
}

impl Policy {
    /// All supported policies.
    pub const ALL: [Policy; 4] = [
        Policy::Fcfs,
        Policy::ShortestJobFirst,
        Policy::PriorityBased,
        Policy::EnergyAware,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::ShortestJobFirst => "Shortest Job First",
            Policy::PriorityBased => "Priority-Based",
            Policy::EnergyAware => "Energy-Aware",
        }
    }

    /// The rule engine implementing this policy.
    pub fn rule_engine(&self) -> RuleEngine {
        match self {
            Policy::Fcfs => RuleEngine::new().with_rule(rules::ArrivalTime),
            // Arrival still leads: among tasks arriving together the
            // shortest goes first.
            Policy::ShortestJobFirst => RuleEngine::new()
                .with_rule(rules::ArrivalTime)
                .with_tie_breaker(rules::BurstTime),
            Policy::PriorityBased => RuleEngine::new()
                .with_rule(rules::TaskPriority)
                .with_tie_breaker(rules::ArrivalTime),
            Policy::EnergyAware => RuleEngine::new()
                .with_rule(rules::PowerDraw)
                .with_tie_breaker(rules::ArrivalTime),
        }
    }

    /// Ordering keys in words, e.g. "Lowest Power Draw, then Earliest Arrival".
    pub fn describe(&self) -> String {
        self.rule_engine().rule_descriptions().join(", then ")
    }

    /// Returns `tasks` in dispatch order. The input slice is not modified.
    pub fn order(&self, tasks: &[Task]) -> Vec<Task> {
        self.rule_engine().order(tasks)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = UnsupportedPolicyError;

    /// Parses a policy identifier (case-insensitive; `_` and `-` read as spaces).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .trim()
            .to_ascii_lowercase()
            .replace(['-', '_'], " ");
        match key.as_str() {
            "fcfs" | "first come first served" => Ok(Policy::Fcfs),
            "sjf" | "shortest job first" => Ok(Policy::ShortestJobFirst),
            "priority" | "priority based" => Ok(Policy::PriorityBased),
            "energy" | "energy aware" => Ok(Policy::EnergyAware),
            "rr" | "round robin" => Err(UnsupportedPolicyError::unavailable(s, ROUND_ROBIN_REASON)),
            _ => Err(UnsupportedPolicyError::unknown(s)),
        }
    }
}
