//! Configuration validation.

use crate::error::{bounded, ConfigError, Error, PoseError, Result};
use crate::motion::check_speed;

use super::{PoseConfig, SequenceConfig, ServoConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Servo output ranges are not inverted
/// - Initial positions and default speeds are usable
/// - Cadences are at least 1 ms
/// - Poses and sequences reference existing servos
/// - Targets respect the servo's position policy
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    for (_, servo) in config.servos.iter() {
        validate_servo(servo)?;
    }

    for (name, pose) in config.poses.iter() {
        validate_pose(name.as_str(), pose, config)?;
    }

    for (name, seq) in config.sequences.iter() {
        validate_sequence(name.as_str(), seq, config)?;
    }

    Ok(())
}

pub(crate) fn validate_servo(config: &ServoConfig) -> Result<()> {
    config.output.validate()?;

    if config.cadence_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidCadence(config.cadence_ms)));
    }

    config.position_policy.check(config.initial_position)?;
    check_speed(config.max_speed)?;

    Ok(())
}

fn servo_for<'a>(name: &str, servo: &str, config: &'a SystemConfig) -> Result<&'a ServoConfig> {
    config.servo(servo).ok_or_else(|| {
        Error::Pose(PoseError::ServoNotFound {
            pose: bounded(name),
            servo: bounded(servo),
        })
    })
}

fn validate_pose(name: &str, pose: &PoseConfig, config: &SystemConfig) -> Result<()> {
    let servo = servo_for(name, pose.servo.as_str(), config)?;

    servo.position_policy.check(pose.target)?;

    if pose.profiled {
        check_speed(pose.effective_speed(servo))?;
    }

    Ok(())
}

fn validate_sequence(name: &str, seq: &SequenceConfig, config: &SystemConfig) -> Result<()> {
    let servo = servo_for(name, seq.servo.as_str(), config)?;

    if seq.waypoints.is_empty() {
        return Err(Error::Pose(PoseError::EmptyWaypoints));
    }

    for waypoint in seq.waypoints.iter() {
        servo.position_policy.check(*waypoint)?;
    }

    if let Some(speed) = seq.max_speed {
        check_speed(speed)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MotionError;
    use crate::config::units::{DegreesPerTick, LogicalPos};
    use crate::config::OutputRange;

    #[test]
    fn test_inverted_range() {
        let config = ServoConfig::new("test", OutputRange::new(170, 10));

        let result = validate_servo(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidOutputRange { min: 170, max: 10 }))
        ));
    }

    #[test]
    fn test_zero_cadence() {
        let mut config = ServoConfig::new("test", OutputRange::new(10, 170));
        config.cadence_ms = 0;

        assert!(matches!(
            validate_servo(&config),
            Err(Error::Config(ConfigError::InvalidCadence(0)))
        ));
    }

    #[test]
    fn test_speed_at_floor_rejected() {
        let mut config = ServoConfig::new("test", OutputRange::new(10, 170));
        config.max_speed = DegreesPerTick(0.2);

        assert!(matches!(
            validate_servo(&config),
            Err(Error::Motion(MotionError::SpeedTooLow { .. }))
        ));
    }

    #[test]
    fn test_initial_position_under_clamp_policy() {
        let mut config = ServoConfig::new("test", OutputRange::new(10, 170));
        config.initial_position = LogicalPos(200);
        assert!(validate_servo(&config).is_err());

        config.position_policy = crate::config::PositionPolicy::Clamp;
        assert!(validate_servo(&config).is_ok());
    }
}
