//! Configuration types.
//!
//! Both configs deserialize from JSON with every field optional, falling
//! back to the defaults below.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid range for `{field}`: {min} > {max}")]
    InvertedRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("invalid range for `{field}`: minimum {min} is below {floor}")]
    BelowFloor {
        field: &'static str,
        min: i64,
        floor: i64,
    },
}

/// Scheduler engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Number of scheduled tasks retained by the history log.
    pub history_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SchedulerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the history capacity.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Parses a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn as_range(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }

    fn check(&self, field: &'static str, floor: i64) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if self.min < floor {
            return Err(ConfigError::BelowFloor {
                field,
                min: self.min,
                floor,
            });
        }
        Ok(())
    }
}

/// Value ranges for random task generation.
///
/// Defaults: arrival 0..=20, burst 1..=10, power 1..=5, priority 1..=5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub arrival: ValueRange,
    pub burst: ValueRange,
    pub power: ValueRange,
    pub priority: ValueRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            arrival: ValueRange::new(0, 20),
            burst: ValueRange::new(1, 10),
            power: ValueRange::new(1, 5),
            priority: ValueRange::new(1, 5),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_arrival(mut self, min: i64, max: i64) -> Self {
        self.arrival = ValueRange::new(min, max);
        self
    }

    pub fn with_burst(mut self, min: i64, max: i64) -> Self {
        self.burst = ValueRange::new(min, max);
        self
    }

    pub fn with_power(mut self, min: i64, max: i64) -> Self {
        self.power = ValueRange::new(min, max);
        self
    }

    pub fn with_priority(mut self, min: i64, max: i64) -> Self {
        self.priority = ValueRange::new(min, max);
        self
    }

    /// Checks that every range is non-empty and that generated records
    /// would pass validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.arrival.check("arrival", 0)?;
        self.burst.check("burst", 1)?;
        self.power.check("power", 0)?;
        self.priority.check("priority", i64::MIN)?;
        Ok(())
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_config_default() {
        let config = SchedulerConfig::default();
        assert_eq!(config.history_capacity, 100);
        assert_eq!(
            SchedulerConfig::new().with_history_capacity(5).history_capacity,
            5
        );
    }

    #[test]
    fn test_scheduler_config_json() {
        let config = SchedulerConfig::from_json_str(r#"{"history_capacity": 2}"#).unwrap();
        assert_eq!(config.history_capacity, 2);

        let config = SchedulerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());

        assert!(SchedulerConfig::from_json_str(r#"{"history_capacity": -1}"#).is_err());
    }

    #[test]
    fn test_generator_config_default() {
        let config = GeneratorConfig::default();
        assert_eq!(config.arrival.as_range(), 0..=20);
        assert_eq!(config.burst.as_range(), 1..=10);
        assert_eq!(config.power.as_range(), 1..=5);
        assert_eq!(config.priority.as_range(), 1..=5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generator_config_partial_json() {
        let config =
            GeneratorConfig::from_json_str(r#"{"burst": {"min": 2, "max": 3}}"#).unwrap();
        assert_eq!(config.burst, ValueRange::new(2, 3));
        assert_eq!(config.arrival, ValueRange::new(0, 20));
    }

    #[test]
    fn test_generator_config_inverted_range() {
        let err = GeneratorConfig::new().with_power(5, 1).validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvertedRange { field: "power", .. }
        ));
    }

    #[test]
    fn test_generator_config_below_floor() {
        let err = GeneratorConfig::new().with_burst(0, 4).validate().unwrap_err();
        assert!(matches!(err, ConfigError::BelowFloor { field: "burst", .. }));

        let err = GeneratorConfig::new().with_arrival(-1, 4).validate().unwrap_err();
        assert!(matches!(err, ConfigError::BelowFloor { field: "arrival", .. }));

        assert!(GeneratorConfig::new().with_priority(-5, 5).validate().is_ok());
    }
}
