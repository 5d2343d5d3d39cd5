//! Rule engine for multi-key dispatching.
//!
//! Composes dispatching rules lexicographically: the first rule decides,
//! each following rule is consulted only on ties, and tasks tied on every
//! rule keep their input order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore};
use crate::models::Task;

/// A composable rule engine for task ordering.
///
/// Sorting is stable, so the produced order is a deterministic total
/// order for any input.
///
/// # Example
/// ```
/// use std::num::NonZeroU64;
/// use u_energy_schedule::dispatching::{rules, RuleEngine};
/// use u_energy_schedule::models::Task;
///
/// let nz = |v| NonZeroU64::new(v).unwrap();
/// let tasks = vec![
///     Task::new(nz(1), 0, nz(5), 1),
///     Task::new(nz(2), 0, nz(2), 1),
/// ];
/// let engine = RuleEngine::new()
///     .with_rule(rules::ArrivalTime)
///     .with_tie_breaker(rules::BurstTime);
///
/// assert_eq!(engine.sort_indices(&tasks), vec![1, 0]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (input order is preserved).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule, or the next key if one is already set.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule consulted after all previously added rules.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Human-readable rule descriptions, in evaluation order.
    pub fn rule_descriptions(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.description()).collect()
    }

    /// Returns indices into `tasks` in dispatch order.
    pub fn sort_indices(&self, tasks: &[Task]) -> Vec<usize> {
        if tasks.is_empty() {
            return Vec::new();
        }

        // Precompute score vectors; `sort_by` is stable.
        let scores: Vec<Vec<RuleScore>> = tasks.iter().map(|t| self.evaluate(t)).collect();
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| compare_scores(&scores[a], &scores[b]));
        indices
    }

    /// Returns a reordered copy of `tasks`; the input is left untouched.
    pub fn order(&self, tasks: &[Task]) -> Vec<Task> {
        self.sort_indices(tasks)
            .into_iter()
            .map(|i| tasks[i].clone())
            .collect()
    }

    /// Evaluates a single task and returns the score of each rule.
    pub fn evaluate(&self, task: &Task) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(task)).collect()
    }
}

fn compare_scores(a: &[RuleScore], b: &[RuleScore]) -> Ordering {
    // Equal after every rule → Equal; the stable sort keeps input order.
    a.iter()
        .zip(b)
        .map(|(x, y)| x.cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
