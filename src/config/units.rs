//! Unit types for servo commands.
//!
//! Keeps caller-facing logical positions and per-tick speeds apart from the raw
//! physical values written to the actuator.

use serde::Deserialize;

/// Largest logical position. Logical space is always `[0, 180]`.
pub const LOGICAL_MAX: u8 = 180;

/// Caller-facing servo position in logical degrees, nominally `[0, 180]`.
///
/// Values above [`LOGICAL_MAX`] can be represented; a servo's
/// [`PositionPolicy`](super::PositionPolicy) decides whether they are rejected
/// or clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct LogicalPos(pub u8);

impl LogicalPos {
    /// Logical zero.
    pub const MIN: Self = Self(0);
    /// Logical 180.
    pub const MAX: Self = Self(LOGICAL_MAX);
    /// Centre of travel.
    pub const CENTER: Self = Self(90);

    /// Create a new LogicalPos value.
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check whether the position lies in `[0, 180]`.
    #[inline]
    pub const fn in_range(self) -> bool {
        self.0 <= LOGICAL_MAX
    }

    /// Absolute logical distance to another position.
    #[inline]
    pub fn distance_to(self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl From<u8> for LogicalPos {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Speed in logical degrees per tick.
///
/// Speeds are calibrated per scheduler tick, not per second: the same value
/// moves twice as fast in wall-clock terms at half the cadence.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct DegreesPerTick(pub f32);

impl DegreesPerTick {
    /// Create a new DegreesPerTick value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to LogicalPos.
    fn logical(self) -> LogicalPos;
}

impl UnitExt for u8 {
    #[inline]
    fn logical(self) -> LogicalPos {
        LogicalPos(self)
    }
}
