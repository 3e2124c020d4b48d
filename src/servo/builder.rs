//! Builder pattern for SmartServo.

use crate::actuator::{Actuator, Clock};
use crate::config::units::{DegreesPerTick, LogicalPos};
use crate::config::{validate_servo, OutputRange, PositionPolicy, ServoConfig, SystemConfig};
use crate::error::{bounded, ConfigError, Error, Result};
use crate::motion::DEFAULT_CADENCE_MS;

use super::driver::SmartServo;

/// Builder for creating SmartServo instances.
pub struct SmartServoBuilder<A, C>
where
    A: Actuator,
    C: Clock,
{
    actuator: Option<A>,
    clock: Option<C>,
    name: Option<heapless::String<32>>,
    output: Option<OutputRange>,
    initial_position: LogicalPos,
    max_speed: DegreesPerTick,
    cadence_ms: u32,
    position_policy: PositionPolicy,
}

impl<A, C> Default for SmartServoBuilder<A, C>
where
    A: Actuator,
    C: Clock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C> SmartServoBuilder<A, C>
where
    A: Actuator,
    C: Clock,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            actuator: None,
            clock: None,
            name: None,
            output: None,
            initial_position: LogicalPos::CENTER,
            max_speed: DegreesPerTick(5.0),
            cadence_ms: DEFAULT_CADENCE_MS,
            position_policy: PositionPolicy::default(),
        }
    }

    /// Set the actuator.
    pub fn actuator(mut self, actuator: A) -> Self {
        self.actuator = Some(actuator);
        self
    }

    /// Set the clock.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the servo name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(bounded(name));
        self
    }

    /// Set the physical output range.
    pub fn output(mut self, min: u16, max: u16) -> Self {
        self.output = Some(OutputRange::new(min, max));
        self
    }

    /// Set the position commanded at initialization.
    pub fn initial_position(mut self, position: LogicalPos) -> Self {
        self.initial_position = position;
        self
    }

    /// Set the default cruise speed.
    pub fn max_speed(mut self, speed: DegreesPerTick) -> Self {
        self.max_speed = speed;
        self
    }

    /// Set the tick cadence in milliseconds.
    pub fn cadence_ms(mut self, cadence_ms: u32) -> Self {
        self.cadence_ms = cadence_ms;
        self
    }

    /// Set the policy for positions above 180.
    pub fn position_policy(mut self, policy: PositionPolicy) -> Self {
        self.position_policy = policy;
        self
    }

    /// Configure from a ServoConfig.
    pub fn from_servo_config(mut self, config: &ServoConfig) -> Self {
        self.name = Some(config.name.clone());
        self.output = Some(config.output);
        self.initial_position = config.initial_position;
        self.max_speed = config.max_speed;
        self.cadence_ms = config.cadence_ms;
        self.position_policy = config.position_policy;
        self
    }

    /// Configure from SystemConfig by servo key.
    pub fn from_config(self, config: &SystemConfig, servo_name: &str) -> Result<Self> {
        let servo_config = config
            .servo(servo_name)
            .ok_or_else(|| Error::Config(ConfigError::ServoNotFound(bounded(servo_name))))?;

        Ok(self.from_servo_config(servo_config))
    }

    /// Build and initialize the SmartServo.
    ///
    /// The returned servo is attached, idle, and commanded to the initial
    /// position.
    ///
    /// # Errors
    ///
    /// Returns an error if required parts are missing, the settings are
    /// invalid, or the actuator fails during initialization.
    pub fn build(self) -> Result<SmartServo<A, C>> {
        let actuator = self
            .actuator
            .ok_or(Error::Config(ConfigError::MissingField("actuator")))?;
        let clock = self
            .clock
            .ok_or(Error::Config(ConfigError::MissingField("clock")))?;
        let output = self
            .output
            .ok_or(Error::Config(ConfigError::MissingField("output range")))?;

        let name = self.name.unwrap_or_else(|| bounded("servo"));

        let config = ServoConfig {
            name,
            output,
            initial_position: self.initial_position,
            max_speed: self.max_speed,
            cadence_ms: self.cadence_ms,
            position_policy: self.position_policy,
        };
        validate_servo(&config)?;

        let mut servo = SmartServo::new(
            actuator,
            clock,
            config.name,
            config.output,
            config.max_speed,
            config.position_policy,
            config.cadence_ms,
        );
        servo.init(config.output, config.initial_position)?;

        Ok(servo)
    }
}
