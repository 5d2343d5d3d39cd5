//! Task-set import/export.
//!
//! The exchange format is a JSON array of objects:
//!
//! ```json
//! [
//!   { "arrival": 0, "burst": 4, "power": 2, "priority": 1 },
//!   { "arrival": 1, "burst": 2, "power": 3, "priority": 1 }
//! ]
//! ```
//!
//! Ids are positional and not written. On import, `priority` may be
//! omitted (the validator defaults it to 1).

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::{RawTaskRecord, Task, TaskField};

/// Import/export error.
#[derive(Debug, Error)]
pub enum TaskSetError {
    #[error("task set I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed task set JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("task set must be a JSON array of objects")]
    NotAnArray,
}

/// How missing required fields are treated on import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Leave missing fields missing; validation rejects the set.
    #[default]
    Strict,
    /// Fill a missing `arrival` with 0 and `burst`/`power` with 1.
    Lenient,
}

/// Reads a task set.
///
/// Only the shape is checked here (array of objects, JSON values per
/// field); value checks are left to [`crate::validation::validate_tasks`].
pub fn read_task_set<R: Read>(
    reader: R,
    mode: ImportMode,
) -> Result<Vec<RawTaskRecord>, TaskSetError> {
    let value: Value = serde_json::from_reader(reader)?;
    let Value::Array(items) = value else {
        return Err(TaskSetError::NotAnArray);
    };
    if !items.iter().all(Value::is_object) {
        return Err(TaskSetError::NotAnArray);
    }

    let mut records: Vec<RawTaskRecord> = serde_json::from_value(Value::Array(items))?;
    if mode == ImportMode::Lenient {
        for record in &mut records {
            fill_default(record, TaskField::Arrival, 0);
            fill_default(record, TaskField::Burst, 1);
            fill_default(record, TaskField::Power, 1);
        }
    }
    debug!(count = records.len(), ?mode, "imported task set");
    Ok(records)
}

fn fill_default(record: &mut RawTaskRecord, field: TaskField, default: i64) {
    if record.get(field).is_none() {
        *record = std::mem::take(record).with_field(field, default);
    }
}

/// Writes a task set as pretty-printed JSON.
pub fn write_task_set<W: Write>(writer: W, tasks: &[Task]) -> Result<(), TaskSetError> {
    let records: Vec<RawTaskRecord> = tasks
        .iter()
        .map(|t| RawTaskRecord::from(t).without_field(TaskField::Id))
        .collect();
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}

/// Reads a task set from a file.
pub fn load_task_set(
    path: impl AsRef<Path>,
    mode: ImportMode,
) -> Result<Vec<RawTaskRecord>, TaskSetError> {
    let file = File::open(path)?;
    read_task_set(BufReader::new(file), mode)
}

/// Writes a task set to a file, replacing any existing content.
pub fn save_task_set(path: impl AsRef<Path>, tasks: &[Task]) -> Result<(), TaskSetError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_task_set(&mut writer, tasks)?;
    writer.flush()?;
    Ok(())
}
