//! # smart-servo
//!
//! S-curve position profiles for PWM hobby servos with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Smooth moves**: Accelerate, cruise and decelerate symmetrically around the
//!   move midpoint, one step per tick
//! - **Logical positions**: Callers work in `[0, 180]`; each servo remaps to its
//!   own physical output range
//! - **Non-blocking**: `tick()` is throttled to a fixed cadence and never sleeps
//! - **Configuration-driven**: Define servos, poses and sequences in TOML files
//! - **embedded-hal 1.0**: `SetDutyCycle` output via [`PwmServo`], `DelayNs` for
//!   blocking helpers
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use smart_servo::{LogicalPos, DegreesPerTick, PwmServo, SmartServo};
//!
//! let mut servo = SmartServo::builder()
//!     .name("pan")
//!     .actuator(PwmServo::new(pwm_channel))
//!     .clock(|| timer.millis())
//!     .output(500, 2500)
//!     .build()?;
//!
//! servo.start_profiled_move(LogicalPos(170), DegreesPerTick(5.0))?;
//! loop {
//!     if servo.tick()? {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and [`StdClock`]
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

// Core modules
pub mod actuator;
pub mod config;
pub mod error;
pub mod motion;
pub mod pose;
pub mod servo;

// Re-exports for ergonomic API
pub use actuator::{Actuator, Clock, PwmServo};
pub use config::{validate_config, OutputRange, PoseConfig, PositionPolicy, SequenceConfig, ServoConfig, SystemConfig};
pub use error::{Error, Result};
pub use motion::{Direction, MotionPhase, ScurveMove};
pub use pose::{PoseBuilder, PoseRegistry, SequenceBuilder, SequenceRunner};
pub use servo::{ServoSystem, SmartServo, SmartServoBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use actuator::StdClock;
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{DegreesPerTick, LogicalPos};
