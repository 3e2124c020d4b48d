//! Waypoint sequence playback.

use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

use crate::actuator::{Actuator, Clock};
use crate::config::units::{DegreesPerTick, LogicalPos};
use crate::config::SequenceConfig;
use crate::error::{bounded, Error, PoseError, Result};
use crate::servo::SmartServo;

use super::builder::MAX_WAYPOINTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunnerState {
    Ready,
    Moving,
    Dwelling { since_ms: u32 },
    Finished,
}

/// Drives one servo through a list of waypoints.
///
/// Each leg is a profiled move. The runner owns no hardware; it is polled with
/// the servo it targets and calls [`SmartServo::tick`] itself.
#[derive(Debug, Clone)]
pub struct SequenceRunner {
    name: String<32>,
    servo: String<32>,
    waypoints: Vec<LogicalPos, MAX_WAYPOINTS>,
    dwell_ms: u32,
    max_speed: Option<DegreesPerTick>,
    index: usize,
    state: RunnerState,
}

impl SequenceRunner {
    /// Create a runner positioned before the first waypoint.
    ///
    /// # Errors
    ///
    /// Returns `PoseError::EmptyWaypoints` if the sequence has no waypoints.
    pub fn new(name: &str, config: &SequenceConfig) -> Result<Self> {
        if config.waypoints.is_empty() {
            return Err(Error::Pose(PoseError::EmptyWaypoints));
        }

        Ok(Self {
            name: bounded(name),
            servo: config.servo.clone(),
            waypoints: config.waypoints.clone(),
            dwell_ms: config.dwell_ms,
            max_speed: config.max_speed,
            index: 0,
            state: RunnerState::Ready,
        })
    }

    /// Sequence name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Name of the servo this sequence drives.
    #[inline]
    pub fn servo_name(&self) -> &str {
        self.servo.as_str()
    }

    /// Index of the waypoint being approached or dwelt at.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Waypoint being approached or dwelt at.
    #[inline]
    pub fn current_target(&self) -> LogicalPos {
        self.waypoints[self.index]
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false; empty sequences are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Whether the last waypoint has been reached.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == RunnerState::Finished
    }

    /// Rewind to the first waypoint.
    pub fn reset(&mut self) {
        self.index = 0;
        self.state = RunnerState::Ready;
    }

    /// Advance playback by at most one servo step.
    ///
    /// Returns `true` once the final waypoint is reached. There is no dwell
    /// after the final waypoint.
    ///
    /// # Errors
    ///
    /// Returns `PoseError::ServoMismatch` if `servo` is not the one this
    /// sequence targets, and forwards any servo error.
    pub fn poll<A, C>(&mut self, servo: &mut SmartServo<A, C>) -> Result<bool>
    where
        A: Actuator,
        C: Clock,
    {
        if servo.name() != self.servo.as_str() {
            return Err(Error::Pose(PoseError::ServoMismatch {
                pose: self.name.clone(),
                servo: self.servo.clone(),
            }));
        }

        match self.state {
            RunnerState::Finished => return Ok(true),
            RunnerState::Ready => {
                let target = self.current_target();
                let speed = self.max_speed.unwrap_or(servo.default_speed());
                debug!(
                    "sequence {}: leg {} -> {}",
                    self.name.as_str(),
                    self.index,
                    target.0
                );
                servo.start_profiled_move(target, speed)?;
                self.state = RunnerState::Moving;
            }
            RunnerState::Moving => {
                if servo.tick()? {
                    self.arrive(servo.now_ms());
                }
            }
            RunnerState::Dwelling { since_ms } => {
                if servo.now_ms().wrapping_sub(since_ms) >= self.dwell_ms {
                    self.index += 1;
                    self.state = RunnerState::Ready;
                }
            }
        }

        Ok(self.is_finished())
    }

    /// Poll until finished, sleeping one servo cadence between polls (blocking).
    pub fn run<A, C, D>(&mut self, servo: &mut SmartServo<A, C>, delay: &mut D) -> Result<()>
    where
        A: Actuator,
        C: Clock,
        D: DelayNs,
    {
        while !self.poll(servo)? {
            delay.delay_ms(servo.cadence_ms());
        }
        Ok(())
    }

    fn arrive(&mut self, now_ms: u32) {
        if self.index + 1 >= self.waypoints.len() {
            info!("sequence {}: finished", self.name.as_str());
            self.state = RunnerState::Finished;
        } else if self.dwell_ms == 0 {
            self.index += 1;
            self.state = RunnerState::Ready;
        } else {
            self.state = RunnerState::Dwelling { since_ms: now_ms };
        }
    }
}
