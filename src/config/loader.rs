//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{bounded, ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use smart_servo::load_config;
///
/// let config = load_config("servos.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(bounded(&e.to_string()))))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(bounded(e.message()))))?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[servos.pan]
name = "Pan"
output = { min = 10, max = 170 }
"#;

        let config = parse_config(toml).unwrap();
        let pan = config.servo("pan").unwrap();
        assert_eq!(pan.output.min, 10);
        assert_eq!(pan.output.max, 170);
    }

    #[test]
    fn test_parse_with_pose() {
        let toml = r#"
[servos.pan]
name = "Pan"
output = { min = 10, max = 170 }

[poses.open]
servo = "pan"
target = 170
max_speed = 4.0
"#;

        let config = parse_config(toml).unwrap();
        let pose = config.pose("open").unwrap();
        assert!(pose.profiled);
        assert_eq!(pose.target.value(), 170);
    }

    #[test]
    fn test_parse_rejects_inverted_range() {
        let toml = r#"
[servos.pan]
name = "Pan"
output = { min = 170, max = 10 }
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidOutputRange { .. }))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config("/nonexistent/servos.toml");
        assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
    }
}
