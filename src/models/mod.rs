//! Scheduling domain models.
//!
//! Provides the data types flowing through a run: loosely-typed caller
//! input, validated tasks, and timeline entries.
//!
//! # Lifecycle
//!
//! | Stage | Type | Produced by |
//! |-------|------|-------------|
//! | Input | `RawTaskRecord` | caller (manual entry, generator, file import) |
//! | Validated | `Task` | `validation::validate_tasks` |
//! | Dispatched | `ScheduledTask` | `scheduler::simulate` |

mod record;
mod schedule;
mod task;

pub use record::{RawTaskRecord, TaskField};
pub use schedule::ScheduledTask;
pub use task::{Task, DEFAULT_PRIORITY};
