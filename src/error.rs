//! Error types for scheduling runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// The policy identifier does not name a supported ordering policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedPolicyError {
    /// The identifier as supplied by the caller.
    pub policy: String,
    /// Why a recognised but unavailable policy was refused.
    pub reason: Option<&'static str>,
}

impl UnsupportedPolicyError {
    /// An identifier that names no known policy.
    pub fn unknown(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            reason: None,
        }
    }

    /// A known identifier whose policy is not available.
    pub fn unavailable(policy: impl Into<String>, reason: &'static str) -> Self {
        Self {
            policy: policy.into(),
            reason: Some(reason),
        }
    }
}

impl std::fmt::Display for UnsupportedPolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported scheduling policy '{}'", self.policy)?;
        if let Some(reason) = self.reason {
            write!(f, ": {reason}")?;
        }
        Ok(())
    }
}

impl std::error::Error for UnsupportedPolicyError {}

/// Error returned by [`crate::scheduler::SchedulerEngine`] when a run is
/// rejected. No partial result or history update accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid task set: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnsupportedPolicy(#[from] UnsupportedPolicyError),
}
