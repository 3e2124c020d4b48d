//! Output range and logical position policy.

use serde::Deserialize;

use crate::error::{ConfigError, MotionError};

use super::units::{LogicalPos, LOGICAL_MAX};

/// Policy for logical positions outside `[0, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum PositionPolicy {
    /// Reject commands outside the logical range.
    #[default]
    Reject,
    /// Clamp commands to logical 180.
    Clamp,
}

impl PositionPolicy {
    /// Apply the policy to a logical position.
    ///
    /// Returns `Some(position)` if valid or clamped, `None` if rejected.
    pub fn apply(self, position: LogicalPos) -> Option<LogicalPos> {
        if position.in_range() {
            Some(position)
        } else {
            match self {
                PositionPolicy::Reject => None,
                PositionPolicy::Clamp => Some(LogicalPos::MAX),
            }
        }
    }

    /// Apply the policy, reporting rejection as a motion error.
    pub fn check(self, position: LogicalPos) -> Result<LogicalPos, MotionError> {
        self.apply(position).ok_or(MotionError::PositionOutOfRange {
            position: position.0,
            max: LOGICAL_MAX,
        })
    }
}

/// Physical output range: the raw actuator values commanded at logical 0 and 180.
///
/// For a PWM servo these are typically pulse widths in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputRange {
    /// Output at logical 0.
    pub min: u16,
    /// Output at logical 180.
    pub max: u16,
}

impl OutputRange {
    /// Create a range without validation.
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Create a validated range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOutputRange` if `min > max`.
    pub fn try_new(min: u16, max: u16) -> Result<Self, ConfigError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check the range is not inverted.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Validate the range, returning the matching config error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ConfigError::InvalidOutputRange {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Width of the range in output units.
    pub fn span(&self) -> u16 {
        self.max.saturating_sub(self.min)
    }
}

impl Default for OutputRange {
    /// Full logical-degree range, matching hobby servo libraries that accept angles.
    fn default() -> Self {
        Self { min: 0, max: 180 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_reject() {
        let policy = PositionPolicy::Reject;

        assert_eq!(policy.apply(LogicalPos(0)), Some(LogicalPos(0)));
        assert_eq!(policy.apply(LogicalPos(180)), Some(LogicalPos(180)));
        assert!(policy.apply(LogicalPos(181)).is_none());
        assert!(matches!(
            policy.check(LogicalPos(200)),
            Err(MotionError::PositionOutOfRange { position: 200, max: 180 })
        ));
    }

    #[test]
    fn test_policy_clamp() {
        let policy = PositionPolicy::Clamp;

        assert_eq!(policy.apply(LogicalPos(90)), Some(LogicalPos(90)));
        assert_eq!(policy.apply(LogicalPos(255)), Some(LogicalPos::MAX));
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(OutputRange::try_new(10, 170).is_ok());
        assert!(OutputRange::try_new(90, 90).is_ok());
        assert_eq!(
            OutputRange::try_new(170, 10),
            Err(ConfigError::InvalidOutputRange { min: 170, max: 10 })
        );
    }
}
