//! S-curve profile constants and phases.
//!
//! The profile is a linear speed ramp integrated once per tick: speed grows by
//! [`ACCELERATION`] from [`VMIN`] until it reaches the cruise speed or the move
//! midpoint, holds, then shrinks back to [`VMIN`] until the goal is reached.

use crate::config::units::DegreesPerTick;
use crate::error::MotionError;

/// Speed change per tick while ramping, in degrees/tick².
pub const ACCELERATION: f32 = 0.25;

/// Speed at the start and end of every ramp, in degrees/tick.
pub const VMIN: f32 = 0.2;

/// Highest accepted cruise speed, in degrees/tick.
pub const VMAX: f32 = 10.0;

/// Moves shorter than this (logical degrees) skip the profile entirely.
pub const MIN_DISTANCE: u8 = 20;

/// Reference tick cadence the constants above were tuned for.
pub const DEFAULT_CADENCE_MS: u32 = 10;

/// Direction of servo travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Toward logical 180.
    Forward,
    /// Toward logical 0.
    Backward,
}

impl Direction {
    /// Direction of travel from `start` to `goal`.
    ///
    /// Equal positions count as backward, matching a strict `goal > start` test.
    #[inline]
    pub fn between(start: u8, goal: u8) -> Self {
        if goal > start {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    /// Whether `position` has reached or passed `mark` in this direction.
    #[inline]
    pub fn has_reached(self, position: f32, mark: f32) -> bool {
        match self {
            Direction::Forward => position >= mark,
            Direction::Backward => position <= mark,
        }
    }
}

/// Current phase of the servo's motion state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionPhase {
    /// No move in progress.
    Idle,
    /// Ramping speed up from `VMIN`.
    Accelerating,
    /// Holding the cruise speed.
    Cruising,
    /// Ramping speed down toward `VMIN`.
    Decelerating,
    /// Goal reached; returns to idle on the next tick.
    Resting,
}

impl MotionPhase {
    /// Get the phase name as a static string.
    pub fn name(self) -> &'static str {
        match self {
            MotionPhase::Idle => "Idle",
            MotionPhase::Accelerating => "Accelerating",
            MotionPhase::Cruising => "Cruising",
            MotionPhase::Decelerating => "Decelerating",
            MotionPhase::Resting => "Resting",
        }
    }
}

/// Check a requested cruise speed against the engine limits.
///
/// # Errors
///
/// `SpeedTooLow` unless `speed > VMIN`, `SpeedExceedsLimit` if `speed > VMAX`.
pub fn check_speed(speed: DegreesPerTick) -> Result<DegreesPerTick, MotionError> {
    if speed.0.is_nan() || speed.0 <= VMIN {
        return Err(MotionError::SpeedTooLow {
            requested: speed.0,
            min: VMIN,
        });
    }
    if speed.0 > VMAX {
        return Err(MotionError::SpeedExceedsLimit {
            requested: speed.0,
            max: VMAX,
        });
    }
    Ok(speed)
}
