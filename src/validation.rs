//! Input validation for task batches.
//!
//! Converts loosely-typed [`RawTaskRecord`]s into [`Task`]s in a single
//! pass. Detects:
//! - Missing required fields (`arrival`, `burst`, `power`)
//! - Non-integer values
//! - Out-of-range values (`burst < 1`, negative `arrival`/`power`, `id < 1`)
//! - Duplicate IDs (explicit or position-assigned)
//! - Batches whose horizon or total energy cannot be represented
//!
//! Validation is all-or-nothing: the first offending record aborts the
//! batch and no tasks are returned.

use serde_json::Value;
use std::collections::HashSet;
use std::num::NonZeroU64;
use thiserror::Error;

use crate::models::{RawTaskRecord, Task, TaskField, DEFAULT_PRIORITY};

const U64_MAX: i128 = u64::MAX as i128;
const I64_MIN: i128 = i64::MIN as i128;
const I64_MAX: i128 = i64::MAX as i128;

/// Validation result.
pub type ValidationResult = Result<Vec<Task>, ValidationError>;

/// A validation error, pinned to one field of one record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("task #{index}: field `{field}`: {kind}")]
pub struct ValidationError {
    /// Zero-based position of the offending record in the input.
    pub index: usize,
    /// Offending field.
    pub field: TaskField,
    /// What was wrong with it.
    pub kind: ValidationErrorKind,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationErrorKind {
    /// A required field is absent.
    #[error("missing required value")]
    Missing,
    /// The value is not an integer (JSON text of the value).
    #[error("expected an integer, got {0}")]
    NotAnInteger(String),
    /// The integer lies outside the accepted range.
    #[error("value {value} is outside {min}..={max}")]
    OutOfRange { value: i128, min: i128, max: i128 },
    /// Two records share the same ID.
    #[error("duplicate task id {0}")]
    DuplicateId(u64),
    /// Cumulative burst, horizon, or energy exceeds `u64`.
    #[error("cumulative total exceeds the representable range")]
    Overflow,
}

impl ValidationError {
    fn new(index: usize, field: TaskField, kind: ValidationErrorKind) -> Self {
        Self { index, field, kind }
    }
}

/// Validates a batch of raw records.
///
/// Checks, in input order and per record in field order
/// (`id`, `arrival`, `burst`, `power`, `priority`):
/// 1. Required numeric fields are present and integral
/// 2. `arrival >= 0`, `burst >= 1`, `power >= 0`, `id >= 1`
/// 3. IDs are unique; a record without an ID gets its 1-based position
/// 4. `max(arrival) + Σ burst` and `Σ burst × power` fit in `u64`
///
/// # Returns
/// The validated tasks in input order, or the first error found.
/// An empty batch is valid.
///
/// # Example
/// ```
/// use u_energy_schedule::models::{RawTaskRecord, TaskField};
/// use u_energy_schedule::validation::validate_tasks;
///
/// let tasks = validate_tasks(&[RawTaskRecord::new(0, 4, 2)]).unwrap();
/// assert_eq!(tasks[0].id(), 1);
/// assert_eq!(tasks[0].priority(), 1);
///
/// let err = validate_tasks(&[RawTaskRecord::new(0, 0, 2)]).unwrap_err();
/// assert_eq!(err.field, TaskField::Burst);
/// ```
pub fn validate_tasks(records: &[RawTaskRecord]) -> ValidationResult {
    let mut tasks = Vec::with_capacity(records.len());
    let mut ids = HashSet::with_capacity(records.len());
    let mut max_arrival: u64 = 0;
    let mut total_burst: u64 = 0;
    let mut total_energy: u64 = 0;

    for (index, record) in records.iter().enumerate() {
        let task = validate_record(index, record)?;

        if !ids.insert(task.id()) {
            return Err(ValidationError::new(
                index,
                TaskField::Id,
                ValidationErrorKind::DuplicateId(task.id()),
            ));
        }

        // Every end time is bounded by max(arrival) + Σ burst.
        let overflow = |field| ValidationError::new(index, field, ValidationErrorKind::Overflow);
        total_burst = total_burst
            .checked_add(task.burst())
            .ok_or_else(|| overflow(TaskField::Burst))?;
        max_arrival = max_arrival.max(task.arrival());
        max_arrival
            .checked_add(total_burst)
            .ok_or_else(|| overflow(TaskField::Arrival))?;
        total_energy = task
            .burst()
            .checked_mul(task.power())
            .and_then(|energy| total_energy.checked_add(energy))
            .ok_or_else(|| overflow(TaskField::Power))?;

        tasks.push(task);
    }

    Ok(tasks)
}

fn validate_record(index: usize, record: &RawTaskRecord) -> Result<Task, ValidationError> {
    let position = u64::try_from(index + 1).unwrap_or(u64::MAX);
    let id = optional_field(index, record, TaskField::Id, 1, U64_MAX)?
        .map_or(position, |v| v as u64);
    let arrival = required_field(index, record, TaskField::Arrival, 0, U64_MAX)? as u64;
    let burst = required_field(index, record, TaskField::Burst, 1, U64_MAX)? as u64;
    let power = required_field(index, record, TaskField::Power, 0, U64_MAX)? as u64;
    let priority = optional_field(index, record, TaskField::Priority, I64_MIN, I64_MAX)?
        .map_or(DEFAULT_PRIORITY, |v| v as i64);

    let id = non_zero(index, TaskField::Id, id)?;
    let burst = non_zero(index, TaskField::Burst, burst)?;

    Ok(Task::new(id, arrival, burst, power).with_priority(priority))
}

fn non_zero(index: usize, field: TaskField, value: u64) -> Result<NonZeroU64, ValidationError> {
    NonZeroU64::new(value).ok_or_else(|| {
        ValidationError::new(
            index,
            field,
            ValidationErrorKind::OutOfRange {
                value: 0,
                min: 1,
                max: U64_MAX,
            },
        )
    })
}

fn required_field(
    index: usize,
    record: &RawTaskRecord,
    field: TaskField,
    min: i128,
    max: i128,
) -> Result<i128, ValidationError> {
    optional_field(index, record, field, min, max)?
        .ok_or_else(|| ValidationError::new(index, field, ValidationErrorKind::Missing))
}

fn optional_field(
    index: usize,
    record: &RawTaskRecord,
    field: TaskField,
    min: i128,
    max: i128,
) -> Result<Option<i128>, ValidationError> {
    let Some(value) = record.get(field) else {
        return Ok(None);
    };
    let value = parse_integer(value).map_err(|kind| ValidationError::new(index, field, kind))?;
    if value < min || value > max {
        return Err(ValidationError::new(
            index,
            field,
            ValidationErrorKind::OutOfRange { value, min, max },
        ));
    }
    Ok(Some(value))
}

/// Reads an integer from a JSON value.
///
/// Accepts JSON integers and strings holding a base-10 integer
/// (surrounding whitespace ignored). Everything else is rejected,
/// including floats with an integral value.
fn parse_integer(value: &Value) -> Result<i128, ValidationErrorKind> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        Value::String(s) => s.trim().parse::<i128>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ValidationErrorKind::NotAnInteger(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_records() -> Vec<RawTaskRecord> {
        vec![
            RawTaskRecord::new(0, 4, 2),
            RawTaskRecord::new(1, 2, 3).with_priority(5),
            RawTaskRecord::new(3, 1, 0).with_id(10),
        ]
    }

    #[test]
    fn test_valid_input() {
        let tasks = validate_tasks(&sample_records()).unwrap();
        assert_eq!(tasks.len(), 3);

        assert_eq!(tasks[0].id(), 1);
        assert_eq!(tasks[0].burst(), 4);
        assert_eq!(tasks[0].priority(), DEFAULT_PRIORITY);

        assert_eq!(tasks[1].id(), 2);
        assert_eq!(tasks[1].priority(), 5);

        assert_eq!(tasks[2].id(), 10);
        assert_eq!(tasks[2].power(), 0);
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert_eq!(validate_tasks(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn test_missing_required_field() {
        let records = vec![
            RawTaskRecord::new(0, 4, 2),
            RawTaskRecord::new(0, 4, 2).without_field(TaskField::Power),
        ];

        let err = validate_tasks(&records).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.field, TaskField::Power);
        assert_eq!(err.kind, ValidationErrorKind::Missing);
    }

    #[test]
    fn test_no_implicit_defaults_for_required_fields() {
        for field in [TaskField::Arrival, TaskField::Burst, TaskField::Power] {
            let records = vec![RawTaskRecord::new(0, 1, 1).without_field(field)];
            let err = validate_tasks(&records).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(err.kind, ValidationErrorKind::Missing);
        }
    }

    #[test]
    fn test_non_integer_values() {
        let cases = [json!("abc"), json!(2.5), json!(4.0), json!(true), json!([1])];
        for value in cases {
            let records = vec![RawTaskRecord::new(0, 1, 1).with_field(TaskField::Burst, value)];
            let err = validate_tasks(&records).unwrap_err();
            assert_eq!(err.field, TaskField::Burst);
            assert!(matches!(err.kind, ValidationErrorKind::NotAnInteger(_)));
        }
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let records = vec![RawTaskRecord::new(0, 1, 1)
            .with_field(TaskField::Arrival, " 7 ")
            .with_field(TaskField::Priority, "-2")];

        let tasks = validate_tasks(&records).unwrap();
        assert_eq!(tasks[0].arrival(), 7);
        assert_eq!(tasks[0].priority(), -2);
    }

    #[test]
    fn test_out_of_range() {
        let err = validate_tasks(&[RawTaskRecord::new(-1, 1, 1)]).unwrap_err();
        assert_eq!(err.field, TaskField::Arrival);
        assert!(matches!(
            err.kind,
            ValidationErrorKind::OutOfRange { value: -1, min: 0, .. }
        ));

        let err = validate_tasks(&[RawTaskRecord::new(0, 0, 1)]).unwrap_err();
        assert_eq!(err.field, TaskField::Burst);

        let err = validate_tasks(&[RawTaskRecord::new(0, 1, -3)]).unwrap_err();
        assert_eq!(err.field, TaskField::Power);

        let err = validate_tasks(&[RawTaskRecord::new(0, 1, 1).with_id(0)]).unwrap_err();
        assert_eq!(err.field, TaskField::Id);
    }

    #[test]
    fn test_priority_accepts_any_integer() {
        let records = vec![
            RawTaskRecord::new(0, 1, 1).with_priority(-100),
            RawTaskRecord::new(0, 1, 1).with_priority(0),
        ];
        let tasks = validate_tasks(&records).unwrap();
        assert_eq!(tasks[0].priority(), -100);
        assert_eq!(tasks[1].priority(), 0);
    }

    #[test]
    fn test_duplicate_explicit_id() {
        let records = vec![
            RawTaskRecord::new(0, 1, 1).with_id(5),
            RawTaskRecord::new(0, 1, 1).with_id(5),
        ];

        let err = validate_tasks(&records).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.field, TaskField::Id);
        assert_eq!(err.kind, ValidationErrorKind::DuplicateId(5));
    }

    #[test]
    fn test_duplicate_with_assigned_id() {
        // Record 0 claims id 2; record 1 is assigned its position (2).
        let records = vec![
            RawTaskRecord::new(0, 1, 1).with_id(2),
            RawTaskRecord::new(0, 1, 1),
        ];

        let err = validate_tasks(&records).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.kind, ValidationErrorKind::DuplicateId(2));
    }

    #[test]
    fn test_first_error_wins() {
        let records = vec![
            RawTaskRecord::new(0, 1, 1),
            RawTaskRecord::new(-1, 0, -1),
            RawTaskRecord::new(0, 0, 1),
        ];

        let err = validate_tasks(&records).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.field, TaskField::Arrival);
    }

    #[test]
    fn test_energy_overflow() {
        let records = vec![RawTaskRecord::new(0, 1, 1)
            .with_field(TaskField::Burst, u64::MAX / 2)
            .with_field(TaskField::Power, 3)];

        let err = validate_tasks(&records).unwrap_err();
        assert_eq!(err.field, TaskField::Power);
        assert_eq!(err.kind, ValidationErrorKind::Overflow);
    }

    #[test]
    fn test_horizon_overflow() {
        let records = vec![
            RawTaskRecord::new(0, 1, 0).with_field(TaskField::Arrival, u64::MAX - 1),
            RawTaskRecord::new(0, 5, 0),
        ];

        let err = validate_tasks(&records).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.kind, ValidationErrorKind::Overflow);
    }

    #[test]
    fn test_error_display() {
        let err = validate_tasks(&[RawTaskRecord::new(0, 0, 1)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("task #0: field `burst`: value 0 is outside 1..={}", u64::MAX)
        );
    }
}
