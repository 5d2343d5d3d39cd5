//! Raw (unvalidated) task records.
//!
//! Records arrive as loosely-typed mappings from manual entry, random
//! generation, or file import. Each field holds an arbitrary JSON value;
//! type and range checks happen once, in [`crate::validation`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Task;

/// Field of a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Id,
    Arrival,
    Burst,
    Power,
    Priority,
}

impl TaskField {
    /// Field name as it appears in the exchange format.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::Id => "id",
            TaskField::Arrival => "arrival",
            TaskField::Burst => "burst",
            TaskField::Power => "power",
            TaskField::Priority => "priority",
        }
    }
}

impl std::fmt::Display for TaskField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied task record.
///
/// Every field is optional at this layer. `id` and `priority` have
/// defaults (1-based position and 1); `arrival`, `burst`, and `power`
/// are required by the validator. A JSON `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTaskRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burst: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Value>,
}

impl RawTaskRecord {
    /// Creates a record with the three required fields.
    pub fn new(arrival: i64, burst: i64, power: i64) -> Self {
        Self {
            id: None,
            arrival: Some(arrival.into()),
            burst: Some(burst.into()),
            power: Some(power.into()),
            priority: None,
        }
    }

    /// Sets an explicit id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets any field to an arbitrary value.
    pub fn with_field(mut self, field: TaskField, value: impl Into<Value>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    /// Clears a field.
    pub fn without_field(mut self, field: TaskField) -> Self {
        *self.slot_mut(field) = None;
        self
    }

    /// Returns the raw value of a field, if present.
    pub fn get(&self, field: TaskField) -> Option<&Value> {
        match field {
            TaskField::Id => self.id.as_ref(),
            TaskField::Arrival => self.arrival.as_ref(),
            TaskField::Burst => self.burst.as_ref(),
            TaskField::Power => self.power.as_ref(),
            TaskField::Priority => self.priority.as_ref(),
        }
    }

    fn slot_mut(&mut self, field: TaskField) -> &mut Option<Value> {
        match field {
            TaskField::Id => &mut self.id,
            TaskField::Arrival => &mut self.arrival,
            TaskField::Burst => &mut self.burst,
            TaskField::Power => &mut self.power,
            TaskField::Priority => &mut self.priority,
        }
    }
}

impl From<&Task> for RawTaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(task.id().into()),
            arrival: Some(task.arrival().into()),
            burst: Some(task.burst().into()),
            power: Some(task.power().into()),
            priority: Some(task.priority().into()),
        }
    }
}
