//! Unit tests for configuration validation.

use smart_servo::config::{validate_config, SystemConfig};
use smart_servo::error::{ConfigError, Error, MotionError, PoseError};

fn parse(toml_str: &str) -> SystemConfig {
    toml::from_str(toml_str).expect("Failed to parse TOML")
}

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let config = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 10, max = 170 }

[poses.left]
servo = "pan"
target = 170

[sequences.sweep]
servo = "pan"
waypoints = [0, 180]
"#,
    );

    assert!(validate_config(&config).is_ok());
}

/// Test that a degenerate range (min == max) is accepted.
#[test]
fn test_degenerate_range_is_valid() {
    let config = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 1500, max = 1500 }
"#,
    );

    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for an inverted output range.
#[test]
fn test_inverted_output_range() {
    let config = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 170, max = 10 }
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidOutputRange { min: 170, max: 10 }))
    ));
}

/// Test validation fails for a zero cadence.
#[test]
fn test_zero_cadence() {
    let config = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }
cadence_ms = 0
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidCadence(0)))
    ));
}

/// Test validation fails for speeds outside (VMIN, VMAX].
#[test]
fn test_speed_bounds() {
    let slow = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }
max_speed = 0.2
"#,
    );
    assert!(matches!(
        validate_config(&slow),
        Err(Error::Motion(MotionError::SpeedTooLow { .. }))
    ));

    let fast = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }
max_speed = 10.5
"#,
    );
    assert!(matches!(
        validate_config(&fast),
        Err(Error::Motion(MotionError::SpeedExceedsLimit { .. }))
    ));

    let ceiling = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }
max_speed = 10.0
"#,
    );
    assert!(validate_config(&ceiling).is_ok());
}

/// Test validation fails for a pose referencing a non-existent servo.
#[test]
fn test_pose_invalid_servo_reference() {
    let config = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }

[poses.up]
servo = "tilt"
target = 180
"#,
    );

    match validate_config(&config) {
        Err(Error::Pose(PoseError::ServoNotFound { pose, servo })) => {
            assert_eq!(pose.as_str(), "up");
            assert_eq!(servo.as_str(), "tilt");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

/// Test that out-of-range targets follow the servo's position policy.
#[test]
fn test_pose_target_policy() {
    let reject = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }

[poses.far]
servo = "pan"
target = 200
"#,
    );
    assert!(matches!(
        validate_config(&reject),
        Err(Error::Motion(MotionError::PositionOutOfRange { position: 200, max: 180 }))
    ));

    let clamp = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }
position_policy = "clamp"

[poses.far]
servo = "pan"
target = 200
"#,
    );
    assert!(validate_config(&clamp).is_ok());
}

/// Test that an instant pose skips the speed check.
#[test]
fn test_instant_pose_ignores_speed() {
    let config = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }

[poses.snap]
servo = "pan"
target = 0
max_speed = 50.0
profiled = false
"#,
    );

    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for an empty sequence.
#[test]
fn test_empty_sequence() {
    let config = parse(
        r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }

[sequences.nothing]
servo = "pan"
waypoints = []
"#,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Pose(PoseError::EmptyWaypoints))
    ));
}
