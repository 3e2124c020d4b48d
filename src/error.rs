//! Error types for smart-servo.
//!
//! Provides unified error handling across configuration, servo output, motion
//! commands and named poses.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all smart-servo operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Actuator or servo-level error
    Servo(ServoError),
    /// Motion command rejected
    Motion(MotionError),
    /// Pose or sequence lookup/execution error
    Pose(PoseError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Servo name not found in configuration
    ServoNotFound(heapless::String<32>),
    /// Pose name not found in configuration
    PoseNotFound(heapless::String<32>),
    /// Sequence name not found in configuration
    SequenceNotFound(heapless::String<32>),
    /// Output range is inverted (min must be <= max)
    InvalidOutputRange {
        /// Output value commanded at logical 0
        min: u16,
        /// Output value commanded at logical 180
        max: u16,
    },
    /// Tick cadence must be at least 1 ms
    InvalidCadence(u32),
    /// Builder is missing a required part
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Servo output errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ServoError {
    /// The actuator driver reported a failure
    Actuator,
}

/// Motion command errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Logical position outside `[0, 180]` under the reject policy
    PositionOutOfRange {
        /// Requested logical position
        position: u8,
        /// Largest accepted logical position
        max: u8,
    },
    /// Cruise speed must be strictly above the minimum ramp speed
    SpeedTooLow {
        /// Requested speed in degrees per tick
        requested: f32,
        /// Minimum ramp speed
        min: f32,
    },
    /// Cruise speed above the engine ceiling
    SpeedExceedsLimit {
        /// Requested speed in degrees per tick
        requested: f32,
        /// Engine speed ceiling
        max: f32,
    },
}

/// Pose and sequence errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PoseError {
    /// Pose or sequence references a servo that does not exist
    ServoNotFound {
        /// Pose or sequence name
        pose: heapless::String<32>,
        /// Referenced servo name
        servo: heapless::String<32>,
    },
    /// Pose was applied to a servo it does not target
    ServoMismatch {
        /// Pose name
        pose: heapless::String<32>,
        /// Servo the pose targets
        servo: heapless::String<32>,
    },
    /// Waypoint list is empty
    EmptyWaypoints,
    /// Too many waypoints
    TooManyWaypoints,
    /// Invalid pose name or registry operation
    InvalidName(heapless::String<64>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Servo(e) => write!(f, "Servo error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
            Error::Pose(e) => write!(f, "Pose error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::ServoNotFound(name) => write!(f, "Servo '{}' not found", name),
            ConfigError::PoseNotFound(name) => write!(f, "Pose '{}' not found", name),
            ConfigError::SequenceNotFound(name) => write!(f, "Sequence '{}' not found", name),
            ConfigError::InvalidOutputRange { min, max } => {
                write!(f, "Invalid output range: min ({}) must be <= max ({})", min, max)
            }
            ConfigError::InvalidCadence(ms) => write!(f, "Invalid cadence: {} ms. Must be >= 1", ms),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ServoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServoError::Actuator => write!(f, "Actuator driver operation failed"),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::PositionOutOfRange { position, max } => {
                write!(f, "Position {} outside logical range [0, {}]", position, max)
            }
            MotionError::SpeedTooLow { requested, min } => {
                write!(f, "Speed {} must be greater than minimum {}", requested, min)
            }
            MotionError::SpeedExceedsLimit { requested, max } => {
                write!(f, "Speed {} exceeds maximum {}", requested, max)
            }
        }
    }
}

impl fmt::Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::ServoNotFound { pose, servo } => {
                write!(f, "Pose '{}' references unknown servo '{}'", pose, servo)
            }
            PoseError::ServoMismatch { pose, servo } => {
                write!(f, "Pose '{}' is for servo '{}'", pose, servo)
            }
            PoseError::EmptyWaypoints => write!(f, "Waypoint list is empty"),
            PoseError::TooManyWaypoints => write!(f, "Too many waypoints (max 32)"),
            PoseError::InvalidName(name) => write!(f, "Invalid pose name or configuration: {}", name),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ServoError> for Error {
    fn from(e: ServoError) -> Self {
        Error::Servo(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

impl From<PoseError> for Error {
    fn from(e: PoseError) -> Self {
        Error::Pose(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ServoError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}

#[cfg(feature = "std")]
impl std::error::Error for PoseError {}

/// Build a bounded name for error payloads, truncating on overflow.
pub(crate) fn bounded<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
