//! Motion module for smart-servo.
//!
//! Provides the logical-to-physical remapper, tick throttling and the per-tick
//! S-curve move executor.

mod cadence;
mod executor;
mod profile;
mod remap;

pub use cadence::Cadence;
pub use executor::ScurveMove;
pub use profile::{
    check_speed, Direction, MotionPhase, ACCELERATION, DEFAULT_CADENCE_MS, MIN_DISTANCE, VMAX,
    VMIN,
};
pub use remap::Remapper;
