//! Servo configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::limits::{OutputRange, PositionPolicy};
use super::units::{DegreesPerTick, LogicalPos};
use crate::motion::DEFAULT_CADENCE_MS;

/// Complete servo configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ServoConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Physical output commanded at logical 0 and 180.
    pub output: OutputRange,

    /// Position commanded (without a profile) at initialization.
    #[serde(default = "default_initial_position")]
    pub initial_position: LogicalPos,

    /// Default cruise speed for profiled moves.
    #[serde(default = "default_max_speed")]
    pub max_speed: DegreesPerTick,

    /// Minimum interval between state machine steps.
    #[serde(default = "default_cadence_ms")]
    pub cadence_ms: u32,

    /// What to do with logical positions above 180.
    #[serde(default)]
    pub position_policy: PositionPolicy,
}

fn default_initial_position() -> LogicalPos {
    LogicalPos::CENTER
}

fn default_max_speed() -> DegreesPerTick {
    DegreesPerTick(5.0)
}

fn default_cadence_ms() -> u32 {
    DEFAULT_CADENCE_MS
}

impl ServoConfig {
    /// Create a configuration with defaults for everything but name and range.
    pub fn new(name: &str, output: OutputRange) -> Self {
        Self {
            name: crate::error::bounded(name),
            output,
            initial_position: default_initial_position(),
            max_speed: default_max_speed(),
            cadence_ms: default_cadence_ms(),
            position_policy: PositionPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServoConfig::new("pan", OutputRange::new(10, 170));

        assert_eq!(config.name.as_str(), "pan");
        assert_eq!(config.initial_position, LogicalPos(90));
        assert_eq!(config.cadence_ms, 10);
        assert_eq!(config.position_policy, PositionPolicy::Reject);
    }
}
