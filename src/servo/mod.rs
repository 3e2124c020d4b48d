//! Servo module for smart-servo.
//!
//! Provides the S-curve servo driver, its builder and the multi-servo facade.

mod builder;
mod driver;
mod system;

pub use builder::SmartServoBuilder;
pub use driver::SmartServo;
pub use system::ServoSystem;
