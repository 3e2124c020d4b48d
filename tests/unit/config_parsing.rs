//! Unit tests for TOML configuration parsing.

use smart_servo::config::{load_config, parse_config, PositionPolicy, SystemConfig};
use smart_servo::config::units::{DegreesPerTick, LogicalPos};
use smart_servo::error::{ConfigError, Error};

/// Test parsing a servo with every field given.
#[test]
fn test_parse_servo_config() {
    let toml_str = r#"
[servos.gripper]
name = "Gripper"
output = { min = 600, max = 2400 }
initial_position = 30
max_speed = 7.5
cadence_ms = 20
position_policy = "clamp"
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let servo = config.servo("gripper").expect("Servo not found");

    assert_eq!(servo.name.as_str(), "Gripper");
    assert_eq!(servo.output.min, 600);
    assert_eq!(servo.output.max, 2400);
    assert_eq!(servo.initial_position, LogicalPos(30));
    assert_eq!(servo.max_speed, DegreesPerTick(7.5));
    assert_eq!(servo.cadence_ms, 20);
    assert_eq!(servo.position_policy, PositionPolicy::Clamp);
}

/// Test that omitted servo fields take their defaults.
#[test]
fn test_parse_servo_defaults() {
    let toml_str = r#"
[servos.pan]
name = "Pan"
output = { min = 10, max = 170 }
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let servo = config.servo("pan").expect("Servo not found");

    assert_eq!(servo.initial_position, LogicalPos(90));
    assert_eq!(servo.max_speed, DegreesPerTick(5.0));
    assert_eq!(servo.cadence_ms, 10);
    assert_eq!(servo.position_policy, PositionPolicy::Reject);
}

/// Test parsing poses and a sequence.
#[test]
fn test_parse_poses_and_sequences() {
    let toml_str = r#"
[servos.tilt]
name = "Tilt"
output = { min = 500, max = 2500 }

[poses.up]
servo = "tilt"
target = 180
max_speed = 2.0

[poses.snap_down]
servo = "tilt"
target = 0
profiled = false

[sequences.scan]
servo = "tilt"
waypoints = [0, 90, 180]
dwell_ms = 250
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    let up = config.pose("up").expect("Pose not found");
    assert_eq!(up.target, LogicalPos(180));
    assert_eq!(up.max_speed, Some(DegreesPerTick(2.0)));
    assert!(up.profiled);

    let snap = config.pose("snap_down").expect("Pose not found");
    assert!(!snap.profiled);
    assert_eq!(snap.max_speed, None);

    let scan = config.sequence("scan").expect("Sequence not found");
    assert_eq!(scan.waypoints.len(), 3);
    assert_eq!(scan.waypoints[2], LogicalPos(180));
    assert_eq!(scan.dwell_ms, 250);
}

/// Test that several servos keep their declaration order.
#[test]
fn test_servo_names_in_order() {
    let toml_str = r#"
[servos.base]
name = "Base"
output = { min = 0, max = 180 }

[servos.shoulder]
name = "Shoulder"
output = { min = 0, max = 180 }

[servos.elbow]
name = "Elbow"
output = { min = 0, max = 180 }
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");
    let names: Vec<_> = config.servo_names().collect();

    assert_eq!(names, vec!["base", "shoulder", "elbow"]);
}

/// Test that a position that does not fit in a byte fails to parse.
#[test]
fn test_parse_rejects_oversized_position() {
    let toml_str = r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }
initial_position = 300
"#;

    let result = parse_config(toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that an unknown policy name fails to parse.
#[test]
fn test_parse_rejects_unknown_policy() {
    let toml_str = r#"
[servos.pan]
name = "Pan"
output = { min = 0, max = 180 }
position_policy = "wrap"
"#;

    assert!(parse_config(toml_str).is_err());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("smart_servo_load_config_test.toml");
    std::fs::write(
        &path,
        r#"
[servos.pan]
name = "Pan"
output = { min = 1000, max = 2000 }
"#,
    )
    .expect("Failed to write config file");

    let config = load_config(&path).expect("Failed to load config");
    assert!(config.servo("pan").is_some());

    let _ = std::fs::remove_file(&path);
}

/// Test that a missing file is reported as an I/O error.
#[test]
fn test_load_config_missing_file() {
    let result = load_config("/nonexistent/servos.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
