//! Pose and sequence configuration from TOML.

use heapless::{String, Vec};
use serde::Deserialize;

use super::servo::ServoConfig;
use super::units::{DegreesPerTick, LogicalPos};

/// A named target position for one servo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PoseConfig {
    /// Target servo name (must match a servo in config).
    pub servo: String<32>,

    /// Target logical position.
    pub target: LogicalPos,

    /// Cruise speed override. Falls back to the servo's `max_speed`.
    #[serde(default)]
    pub max_speed: Option<DegreesPerTick>,

    /// Run through the S-curve profile (`true`) or jump directly.
    #[serde(default = "default_profiled")]
    pub profiled: bool,
}

fn default_profiled() -> bool {
    true
}

impl PoseConfig {
    /// Cruise speed for this pose on the given servo.
    pub fn effective_speed(&self, servo: &ServoConfig) -> DegreesPerTick {
        self.max_speed.unwrap_or(servo.max_speed)
    }
}

/// Waypoints visited in order by one servo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceConfig {
    /// Target servo name.
    pub servo: String<32>,

    /// Ordered list of logical positions (max 32).
    pub waypoints: Vec<LogicalPos, 32>,

    /// Pause at each waypoint before moving on (milliseconds).
    #[serde(default)]
    pub dwell_ms: u32,

    /// Cruise speed override for every leg.
    #[serde(default)]
    pub max_speed: Option<DegreesPerTick>,
}
