//! Smart servo driver.
//!
//! Generic over the actuator that produces the output signal and the clock used
//! to pace the motion state machine.

use embedded_hal::delay::DelayNs;

use crate::actuator::{Actuator, Clock};
use crate::config::units::{DegreesPerTick, LogicalPos};
use crate::config::{OutputRange, PoseConfig, PositionPolicy};
use crate::error::{bounded, Error, PoseError, Result, ServoError};
use crate::motion::{check_speed, Cadence, MotionPhase, Remapper, ScurveMove, MIN_DISTANCE};
use crate::pose::PoseRegistry;

use super::SmartServoBuilder;

/// Servo with S-curve position profiles.
///
/// Generic over:
/// - `A`: output stage (must implement [`Actuator`])
/// - `C`: millisecond time source (must implement [`Clock`])
///
/// There is no position feedback: the current position is whatever was last
/// commanded.
pub struct SmartServo<A, C>
where
    A: Actuator,
    C: Clock,
{
    /// Output stage.
    actuator: A,

    /// Time source for tick throttling.
    clock: C,

    /// Logical-to-physical mapping.
    remap: Remapper,

    /// Servo name for logging/debugging.
    name: heapless::String<32>,

    /// Last commanded logical position.
    current: LogicalPos,

    /// Cruise speed used when a command does not specify one.
    default_speed: DegreesPerTick,

    /// Handling of logical positions above 180.
    policy: PositionPolicy,

    /// Tick throttle.
    cadence: Cadence,

    /// Profiled move in progress, if any.
    active: Option<ScurveMove>,
}

impl<A, C> SmartServo<A, C>
where
    A: Actuator,
    C: Clock,
{
    /// Create an uninitialized servo. Nothing is written until [`init`](Self::init).
    pub(crate) fn new(
        actuator: A,
        clock: C,
        name: heapless::String<32>,
        range: OutputRange,
        default_speed: DegreesPerTick,
        policy: PositionPolicy,
        cadence_ms: u32,
    ) -> Self {
        let now = clock.now_ms();
        Self {
            actuator,
            clock,
            remap: Remapper::new(range),
            name,
            current: LogicalPos::CENTER,
            default_speed,
            policy,
            cadence: Cadence::new(cadence_ms, now),
            active: None,
        }
    }

    /// Create a builder for configuring a servo.
    pub fn builder() -> SmartServoBuilder<A, C> {
        SmartServoBuilder::new()
    }

    /// Get the servo name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Last commanded logical position.
    #[inline]
    pub fn current_position(&self) -> LogicalPos {
        self.current
    }

    /// Physical output for the current position.
    #[inline]
    pub fn output(&self) -> u16 {
        self.remap.remap(self.current)
    }

    /// Current physical output range.
    #[inline]
    pub fn output_range(&self) -> OutputRange {
        self.remap.range()
    }

    /// Current motion phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.active
            .as_ref()
            .map(|m| m.phase())
            .unwrap_or(MotionPhase::Idle)
    }

    /// Whether no move is in progress.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Profiled move in progress, if any.
    #[inline]
    pub fn active_move(&self) -> Option<&ScurveMove> {
        self.active.as_ref()
    }

    /// Default cruise speed.
    #[inline]
    pub fn default_speed(&self) -> DegreesPerTick {
        self.default_speed
    }

    /// Position policy applied to every command.
    #[inline]
    pub fn position_policy(&self) -> PositionPolicy {
        self.policy
    }

    /// Minimum interval between state machine steps.
    #[inline]
    pub fn cadence_ms(&self) -> u32 {
        self.cadence.period_ms()
    }

    /// Read the servo's clock.
    #[inline]
    pub fn now_ms(&self) -> u32 {
        self.clock.now_ms()
    }

    /// Whether the actuator is driving its output.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.actuator.is_attached()
    }

    /// Borrow the actuator.
    #[inline]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Release the actuator and clock.
    pub fn release(self) -> (A, C) {
        (self.actuator, self.clock)
    }

    /// Initialize output: apply the range, attach and jump to `initial`.
    ///
    /// Any move in progress is dropped and the tick window restarts.
    ///
    /// # Errors
    ///
    /// Rejects an inverted range or an out-of-range position (under the reject
    /// policy), and reports actuator failures.
    pub fn init(&mut self, range: OutputRange, initial: LogicalPos) -> Result<()> {
        range.validate()?;
        let initial = self.policy.check(initial)?;

        self.remap.configure(range);
        self.attach()?;
        self.active = None;
        self.commit(initial)?;
        self.cadence.reset(self.clock.now_ms());

        info!(
            "servo {}: init at {} (output {})",
            self.name.as_str(),
            initial.0,
            self.output()
        );
        Ok(())
    }

    /// Change the output range and re-command the current position through it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOutputRange` if `min > max`. If the write
    /// fails the previous range is kept.
    pub fn set_limits(&mut self, range: OutputRange) -> Result<()> {
        range.validate()?;
        let previous = self.remap.range();
        self.remap.configure(range);
        if let Err(e) = self.commit(self.current) {
            self.remap.configure(previous);
            return Err(e);
        }
        debug!(
            "servo {}: range {}..{}",
            self.name.as_str(),
            range.min,
            range.max
        );
        Ok(())
    }

    /// Jump directly to a position without a profile.
    ///
    /// Supersedes any move in progress.
    pub fn move_to(&mut self, position: LogicalPos) -> Result<()> {
        let position = self.policy.check(position)?;
        if self.active.take().is_some() {
            debug!("servo {}: move superseded", self.name.as_str());
        }
        self.commit(position)
    }

    /// Start an S-curve move to `end` with cruise speed `max_speed`.
    ///
    /// Moves shorter than [`MIN_DISTANCE`] jump straight to `end` and leave the
    /// servo idle. Longer moves are driven by [`tick`](Self::tick).
    ///
    /// # Errors
    ///
    /// Rejects positions outside the logical range (reject policy) and speeds
    /// outside `(VMIN, VMAX]`, and reports actuator failures.
    pub fn start_profiled_move(&mut self, end: LogicalPos, max_speed: DegreesPerTick) -> Result<()> {
        let end = self.policy.check(end)?;
        let max_speed = check_speed(max_speed)?;

        if !self.actuator.is_attached() {
            self.attach()?;
        }

        if self.current.distance_to(end) < MIN_DISTANCE {
            debug!(
                "servo {}: short move {} -> {}",
                self.name.as_str(),
                self.current.0,
                end.0
            );
            self.active = None;
            return self.commit(end);
        }

        debug!(
            "servo {}: s-curve {} -> {} at {}",
            self.name.as_str(),
            self.current.0,
            end.0,
            max_speed.0
        );
        self.active = Some(ScurveMove::new(self.current, end, max_speed));
        Ok(())
    }

    /// Start an S-curve move at the default cruise speed.
    pub fn start_move(&mut self, end: LogicalPos) -> Result<()> {
        self.start_profiled_move(end, self.default_speed)
    }

    /// Advance the motion state machine by one step if a cadence window has
    /// elapsed.
    ///
    /// Call this at least as often as the cadence. Returns `true` when the servo
    /// is idle.
    pub fn tick(&mut self) -> Result<bool> {
        if !self.cadence.ready(self.clock.now_ms()) {
            return Ok(self.is_idle());
        }

        let Some(mv) = self.active.as_mut() else {
            return Ok(true);
        };

        let before = mv.phase();
        let snapshot = mv.clone();
        match mv.advance() {
            Some(position) => {
                let after = mv.phase();
                if after != before {
                    trace!(
                        "servo {}: {} -> {} at {}",
                        self.name.as_str(),
                        before.name(),
                        after.name(),
                        position.0
                    );
                }
                if let Err(e) = self.commit(position) {
                    // Retry the same step on the next window.
                    self.active = Some(snapshot);
                    return Err(e);
                }
            }
            None => {
                self.active = None;
                debug!("servo {}: idle at {}", self.name.as_str(), self.current.0);
            }
        }

        Ok(self.is_idle())
    }

    /// Tick until idle, sleeping one cadence between steps (blocking).
    pub fn run_to_completion<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        while !self.tick()? {
            delay.delay_ms(self.cadence.period_ms());
        }
        Ok(())
    }

    /// Stop driving the output. Motion state is left untouched.
    pub fn detach(&mut self) -> Result<()> {
        debug!("servo {}: detach", self.name.as_str());
        self.actuator.detach().map_err(|e| self.fault(e))
    }

    /// Start the move described by a pose.
    ///
    /// # Errors
    ///
    /// Returns `PoseError::ServoMismatch` if the pose targets another servo.
    pub fn apply_pose_config(&mut self, name: &str, pose: &PoseConfig) -> Result<()> {
        if pose.servo.as_str() != self.name.as_str() {
            return Err(Error::Pose(PoseError::ServoMismatch {
                pose: bounded(name),
                servo: pose.servo.clone(),
            }));
        }

        if pose.profiled {
            self.start_profiled_move(pose.target, pose.max_speed.unwrap_or(self.default_speed))
        } else {
            self.move_to(pose.target)
        }
    }

    /// Look up a named pose and start its move.
    ///
    /// # Errors
    ///
    /// Returns an error if the pose is not registered or targets another servo.
    pub fn apply_pose(&mut self, name: &str, registry: &PoseRegistry) -> Result<()> {
        let pose = registry.get_or_error(name)?;
        self.apply_pose_config(name, pose)
    }

    fn attach(&mut self) -> Result<()> {
        self.actuator.attach().map_err(|e| self.fault(e))
    }

    /// Write a position to the actuator and record it as current.
    fn commit(&mut self, position: LogicalPos) -> Result<()> {
        let output = self.remap.remap(position);
        self.actuator.write(output).map_err(|e| self.fault(e))?;
        self.current = position;
        Ok(())
    }

    fn fault(&self, _error: A::Error) -> Error {
        warn!("servo {}: actuator fault", self.name.as_str());
        Error::Servo(ServoError::Actuator)
    }
}
