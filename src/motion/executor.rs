//! Motion execution - per-tick S-curve integration.

use libm::roundf;

use crate::config::units::{DegreesPerTick, LogicalPos};

use super::profile::{Direction, MotionPhase, ACCELERATION, VMIN};

/// Internal stage of an active move. The decel trigger only exists once cruising.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Accelerating,
    Cruising { decel_at: f32 },
    Decelerating,
    Resting,
}

/// Runtime state of one profiled move.
///
/// Created when a long move starts and dropped once it has rested at the goal,
/// so none of these values outlive the move they describe.
#[derive(Debug, Clone)]
pub struct ScurveMove {
    /// Position the move started from.
    start: u8,

    /// Destination.
    goal: u8,

    /// Last committed integer position.
    committed: u8,

    /// Sub-degree position accumulator.
    pos: f32,

    /// Current speed magnitude in degrees/tick.
    speed: f32,

    /// Cruise speed ceiling.
    max_speed: f32,

    /// Travel midpoint, fixed at move start.
    midpoint: f32,

    /// Committed position when cruise speed was reached, if it was.
    cruise_entry: Option<u8>,

    /// Direction of travel, fixed at move start.
    direction: Direction,

    stage: Stage,
}

impl ScurveMove {
    /// Start a profiled move from `start` to `goal`.
    ///
    /// The caller is responsible for validating `max_speed` and for bypassing
    /// moves shorter than [`MIN_DISTANCE`](super::MIN_DISTANCE).
    pub fn new(start: LogicalPos, goal: LogicalPos, max_speed: DegreesPerTick) -> Self {
        let (s, g) = (f32::from(start.0), f32::from(goal.0));

        Self {
            start: start.0,
            goal: goal.0,
            committed: start.0,
            pos: s,
            speed: VMIN,
            max_speed: max_speed.0,
            midpoint: s + (g - s) / 2.0,
            cruise_entry: None,
            direction: Direction::between(start.0, goal.0),
            stage: Stage::Accelerating,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        match self.stage {
            Stage::Accelerating => MotionPhase::Accelerating,
            Stage::Cruising { .. } => MotionPhase::Cruising,
            Stage::Decelerating => MotionPhase::Decelerating,
            Stage::Resting => MotionPhase::Resting,
        }
    }

    /// Position the move started from.
    #[inline]
    pub fn start(&self) -> LogicalPos {
        LogicalPos(self.start)
    }

    /// Destination.
    #[inline]
    pub fn goal(&self) -> LogicalPos {
        LogicalPos(self.goal)
    }

    /// Last committed position.
    #[inline]
    pub fn committed(&self) -> LogicalPos {
        LogicalPos(self.committed)
    }

    /// Direction of travel.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current speed in degrees/tick.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Cruise speed ceiling in degrees/tick.
    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Fractional position accumulator.
    #[inline]
    pub fn position(&self) -> f32 {
        self.pos
    }

    /// Travel midpoint.
    #[inline]
    pub fn midpoint(&self) -> f32 {
        self.midpoint
    }

    /// Committed position at which cruise speed was reached.
    #[inline]
    pub fn cruise_entry(&self) -> Option<LogicalPos> {
        self.cruise_entry.map(LogicalPos)
    }

    /// Position at which deceleration begins after cruising.
    ///
    /// Mirrors the cruise entry point about the midpoint so the braking ramp is
    /// as long as the acceleration ramp. `None` if cruise was never reached.
    #[inline]
    pub fn decel_trigger(&self) -> Option<f32> {
        self.cruise_entry
            .map(|entry| 2.0 * self.midpoint - f32::from(entry))
    }

    /// Whether the goal has been reached.
    #[inline]
    pub fn is_resting(&self) -> bool {
        self.stage == Stage::Resting
    }

    /// Advance the state machine by one tick.
    ///
    /// Returns the position to command, or `None` when resting at the goal.
    pub fn advance(&mut self) -> Option<LogicalPos> {
        let committed = match self.stage {
            Stage::Accelerating => {
                self.speed = (self.speed + ACCELERATION).min(self.max_speed);
                let before = self.committed;
                let committed = self.integrate();

                if self.speed >= self.max_speed {
                    self.cruise_entry = Some(before);
                    self.stage = Stage::Cruising {
                        decel_at: 2.0 * self.midpoint - f32::from(before),
                    };
                } else if self
                    .direction
                    .has_reached(f32::from(committed), self.midpoint)
                {
                    // Too short to cruise: brake from the partial speed.
                    self.stage = Stage::Decelerating;
                }
                committed
            }
            Stage::Cruising { decel_at } => {
                let committed = self.integrate();
                if self.direction.has_reached(f32::from(committed), decel_at) {
                    self.stage = Stage::Decelerating;
                }
                committed
            }
            Stage::Decelerating => {
                self.speed = (self.speed - ACCELERATION).max(VMIN);
                self.integrate()
            }
            Stage::Resting => return None,
        };

        // Arrival wins over any transition taken above.
        if committed == self.goal {
            self.stage = Stage::Resting;
        }

        Some(LogicalPos(committed))
    }

    /// Move the accumulator toward the goal by the current speed and commit it.
    fn integrate(&mut self) -> u8 {
        let sign = self.direction.sign();
        let remaining = (f32::from(self.goal) - self.pos) * sign;

        if remaining > 0.0 {
            self.pos += sign * self.speed.min(remaining);
        }
        self.pos = self.pos.max(0.0);

        self.committed = roundf(self.pos) as u8;
        self.committed
    }
}
