//! Energy-aware single-resource dispatch simulator.
//!
//! Simulates dispatch of a batch of independent, non-preemptible tasks onto
//! one processing resource under a selectable ordering policy, and reports
//! the resulting timeline and cumulative energy cost.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `RawTaskRecord`, `Task`, `ScheduledTask`
//! - **`validation`**: Raw records → tasks (types, ranges, unique IDs)
//! - **`dispatching`**: Ordering policies built from dispatching rules
//! - **`scheduler`**: Timeline simulation, run metrics, `SchedulerEngine`
//! - **`history`**: Bounded FIFO log of scheduled tasks
//! - **`config`**: Engine and generator configuration
//! - **`generator`**: Random task sets
//! - **`taskset`**: JSON import/export of task sets
//!
//! # Example
//!
//! ```
//! use u_energy_schedule::models::RawTaskRecord;
//! use u_energy_schedule::scheduler::SchedulerEngine;
//!
//! let engine = SchedulerEngine::default();
//! let tasks = vec![RawTaskRecord::new(0, 5, 1), RawTaskRecord::new(0, 2, 1)];
//! let result = engine.schedule(&tasks, "Shortest Job First").unwrap();
//!
//! assert_eq!(result.dispatch_order(), vec![2, 1]);
//! assert_eq!(result.makespan(), 7);
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Brucker (2007), "Scheduling Algorithms"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod history;
pub mod models;
pub mod scheduler;
pub mod taskset;
pub mod validation;

pub use error::{ScheduleError, UnsupportedPolicyError};
