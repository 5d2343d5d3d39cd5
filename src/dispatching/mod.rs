//! Dispatching rules, rule engine, and ordering policies.
//!
//! A [`Policy`] is a named combination of [`DispatchingRule`]s evaluated
//! by a [`RuleEngine`]: the first rule decides, later rules only break
//! ties, and remaining ties keep input order.
//!
//! # Usage
//!
//! ```
//! use u_energy_schedule::dispatching::{rules, Policy, RuleEngine};
//!
//! // Equivalent to Policy::EnergyAware
//! let engine = RuleEngine::new()
//!     .with_rule(rules::PowerDraw)
//!     .with_tie_breaker(rules::ArrivalTime);
//!
//! let policy: Policy = "Energy-Aware".parse().unwrap();
//! assert_eq!(policy, Policy::EnergyAware);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
mod policy;
pub mod rules;

pub use engine::RuleEngine;
pub use policy::Policy;

use crate::models::Task;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = dispatched first. Wide enough to hold any `u64` time
/// or `i64` priority without loss.
pub type RuleScore = i128;

/// A dispatching rule that scores a task.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "ARRIVAL", "BURST").
    fn name(&self) -> &'static str;

    /// Scores a task; lower = dispatched first.
    fn evaluate(&self, task: &Task) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
