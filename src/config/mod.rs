//! Configuration module for smart-servo.
//!
//! Provides types for loading and validating servo, pose and sequence
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod limits;
mod pose;
mod servo;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use limits::{OutputRange, PositionPolicy};
pub use pose::{PoseConfig, SequenceConfig};
pub use servo::ServoConfig;
pub use system::SystemConfig;
pub use validation::validate_config;
pub(crate) use validation::validate_servo;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{DegreesPerTick, LogicalPos, LOGICAL_MAX};
