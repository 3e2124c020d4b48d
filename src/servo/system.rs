//! Servo system facade for multi-servo configuration.
//!
//! Provides a high-level API for building servos, resolving poses and starting
//! sequences from a single configuration.

use crate::actuator::{Actuator, Clock};
use crate::config::{PoseConfig, ServoConfig, SystemConfig};
use crate::error::{bounded, ConfigError, Error, Result};
use crate::pose::{PoseRegistry, SequenceRunner};

use super::{SmartServo, SmartServoBuilder};

/// A facade for managing several servos from configuration.
///
/// `ServoSystem` provides:
/// - Creating servos from named configurations
/// - Pose lookup through a registry built from the `[poses]` table
/// - Sequence runners for the `[sequences]` table
///
/// Servos themselves are owned by the caller since their actuator and clock
/// types are generic.
///
/// # Example
///
/// ```rust,ignore
/// use smart_servo::{ServoSystem, PwmServo};
///
/// let config = smart_servo::load_config("servos.toml")?;
/// let system = ServoSystem::from_config(config);
///
/// let mut pan = system.build_servo("pan", PwmServo::new(pwm0), clock)?;
/// pan.apply_pose("look_left", system.poses())?;
/// pan.run_to_completion(&mut delay)?;
/// ```
pub struct ServoSystem {
    /// The system configuration.
    config: SystemConfig,
    /// Pose registry for named lookups.
    registry: PoseRegistry,
}

impl ServoSystem {
    /// Create a new servo system from configuration.
    ///
    /// This fills the pose registry but does not create any servos.
    pub fn from_config(config: SystemConfig) -> Self {
        let registry = PoseRegistry::from_config(&config);
        Self { config, registry }
    }

    /// Get the system configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Get the pose registry.
    pub fn poses(&self) -> &PoseRegistry {
        &self.registry
    }

    /// Get a servo configuration by name.
    pub fn servo_config(&self, name: &str) -> Option<&ServoConfig> {
        self.config.servo(name)
    }

    /// Check if a servo name exists in the configuration.
    pub fn has_servo(&self, name: &str) -> bool {
        self.config.servo(name).is_some()
    }

    /// List all configured servo names.
    pub fn servo_names(&self) -> impl Iterator<Item = &str> {
        self.config.servo_names()
    }

    /// Build and initialize a servo from its configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the servo name doesn't exist or initialization fails.
    pub fn build_servo<A, C>(&self, name: &str, actuator: A, clock: C) -> Result<SmartServo<A, C>>
    where
        A: Actuator,
        C: Clock,
    {
        let servo_config = self
            .config
            .servo(name)
            .ok_or_else(|| Error::Config(ConfigError::ServoNotFound(bounded(name))))?;

        // Servos are addressed by their table key, not the display name.
        let mut servo_config = servo_config.clone();
        servo_config.name = bounded(name);

        SmartServoBuilder::new()
            .actuator(actuator)
            .clock(clock)
            .from_servo_config(&servo_config)
            .build()
    }

    /// Get a pose by name, with error if not found.
    pub fn pose(&self, name: &str) -> Result<&PoseConfig> {
        self.registry.get_or_error(name)
    }

    /// Get all pose names for a specific servo.
    pub fn poses_for_servo<'a>(&'a self, servo: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.registry.for_servo(servo)
    }

    /// Create a runner for a named sequence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::SequenceNotFound` if no such sequence exists.
    pub fn sequence_runner(&self, name: &str) -> Result<SequenceRunner> {
        let sequence = self
            .config
            .sequence(name)
            .ok_or_else(|| Error::Config(ConfigError::SequenceNotFound(bounded(name))))?;

        SequenceRunner::new(name, sequence)
    }
}
