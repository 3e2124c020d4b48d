//! Pose module for smart-servo.
//!
//! Provides named pose storage, lookup and building, plus waypoint sequence
//! playback.

mod builder;
mod registry;
mod sequence;

pub use builder::{PoseBuilder, SequenceBuilder, MAX_WAYPOINTS};
pub use registry::{PoseRegistry, MAX_POSES};
pub use sequence::SequenceRunner;
