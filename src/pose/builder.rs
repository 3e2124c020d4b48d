//! Builders for programmatic pose and sequence creation.

use heapless::String;

use crate::config::units::{DegreesPerTick, LogicalPos};
use crate::config::{PoseConfig, SequenceConfig};
use crate::error::{bounded, Error, PoseError, Result};

/// Builder for single-target poses.
#[derive(Debug, Clone)]
pub struct PoseBuilder {
    servo: Option<String<32>>,
    target: Option<LogicalPos>,
    max_speed: Option<DegreesPerTick>,
    profiled: bool,
}

impl Default for PoseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseBuilder {
    /// Create a new pose builder.
    pub fn new() -> Self {
        Self {
            servo: None,
            target: None,
            max_speed: None,
            profiled: true,
        }
    }

    /// Set the target servo name.
    pub fn servo(mut self, name: &str) -> Self {
        self.servo = String::try_from(name).ok();
        self
    }

    /// Set the target position.
    pub fn target(mut self, position: LogicalPos) -> Self {
        self.target = Some(position);
        self
    }

    /// Override the servo's cruise speed.
    pub fn max_speed(mut self, speed: DegreesPerTick) -> Self {
        self.max_speed = Some(speed);
        self
    }

    /// Jump straight to the target instead of running a profile.
    pub fn instant(mut self) -> Self {
        self.profiled = false;
        self
    }

    /// Build the pose configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if servo or target is missing.
    pub fn build(self) -> Result<PoseConfig> {
        let servo = self
            .servo
            .ok_or_else(|| Error::Pose(PoseError::InvalidName(bounded("servo not specified"))))?;

        let target = self
            .target
            .ok_or_else(|| Error::Pose(PoseError::InvalidName(bounded("target not specified"))))?;

        Ok(PoseConfig {
            servo,
            target,
            max_speed: self.max_speed,
            profiled: self.profiled,
        })
    }
}

/// Maximum number of waypoints in a sequence.
pub const MAX_WAYPOINTS: usize = 32;

/// Builder for waypoint sequences.
#[derive(Debug, Clone)]
pub struct SequenceBuilder {
    servo: Option<String<32>>,
    waypoints: heapless::Vec<LogicalPos, MAX_WAYPOINTS>,
    overflow: bool,
    dwell_ms: u32,
    max_speed: Option<DegreesPerTick>,
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceBuilder {
    /// Create a new sequence builder.
    pub fn new() -> Self {
        Self {
            servo: None,
            waypoints: heapless::Vec::new(),
            overflow: false,
            dwell_ms: 0,
            max_speed: None,
        }
    }

    /// Set the target servo name.
    pub fn servo(mut self, name: &str) -> Self {
        self.servo = String::try_from(name).ok();
        self
    }

    /// Append a waypoint.
    pub fn waypoint(mut self, position: LogicalPos) -> Self {
        if self.waypoints.push(position).is_err() {
            self.overflow = true;
        }
        self
    }

    /// Append several waypoints.
    pub fn waypoints(self, positions: &[LogicalPos]) -> Self {
        positions.iter().fold(self, |b, &p| b.waypoint(p))
    }

    /// Pause at each waypoint before the next leg.
    pub fn dwell(mut self, dwell_ms: u32) -> Self {
        self.dwell_ms = dwell_ms;
        self
    }

    /// Override the servo's cruise speed for every leg.
    pub fn max_speed(mut self, speed: DegreesPerTick) -> Self {
        self.max_speed = Some(speed);
        self
    }

    /// Build the sequence configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the servo is missing or the waypoint list is empty
    /// or overflowed.
    pub fn build(self) -> Result<SequenceConfig> {
        let servo = self
            .servo
            .ok_or_else(|| Error::Pose(PoseError::InvalidName(bounded("servo not specified"))))?;

        if self.overflow {
            return Err(Error::Pose(PoseError::TooManyWaypoints));
        }
        if self.waypoints.is_empty() {
            return Err(Error::Pose(PoseError::EmptyWaypoints));
        }

        Ok(SequenceConfig {
            servo,
            waypoints: self.waypoints,
            dwell_ms: self.dwell_ms,
            max_speed: self.max_speed,
        })
    }
}
