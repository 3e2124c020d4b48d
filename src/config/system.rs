//! Root of a servo configuration file.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::pose::{PoseConfig, SequenceConfig};
use super::servo::ServoConfig;

/// Keyed table from a `[servos.*]`, `[poses.*]` or `[sequences.*]` section.
type Table<T, const N: usize> = FnvIndexMap<String<32>, T, N>;

/// Everything one configuration file describes.
///
/// Servos are addressed by their table key (`[servos.pan]` is `"pan"`); poses
/// and sequences refer to servos by that key, never by display name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Servos by key, in file order (max 8).
    pub servos: Table<ServoConfig, 8>,

    /// Named single-target poses (max 32).
    #[serde(default)]
    pub poses: Table<PoseConfig, 32>,

    /// Named waypoint sequences (max 16).
    #[serde(default)]
    pub sequences: Table<SequenceConfig, 16>,
}

/// Look a key up without allocating; keys longer than 32 bytes never match.
fn lookup<'a, T, const N: usize>(table: &'a Table<T, N>, key: &str) -> Option<&'a T> {
    table.get(&String::<32>::try_from(key).ok()?)
}

impl SystemConfig {
    /// Servo settings for a key.
    pub fn servo(&self, key: &str) -> Option<&ServoConfig> {
        lookup(&self.servos, key)
    }

    /// Pose by name.
    pub fn pose(&self, name: &str) -> Option<&PoseConfig> {
        lookup(&self.poses, name)
    }

    /// Sequence by name.
    pub fn sequence(&self, name: &str) -> Option<&SequenceConfig> {
        lookup(&self.sequences, name)
    }

    /// Servo keys in file order.
    pub fn servo_names(&self) -> impl Iterator<Item = &str> {
        self.servos.keys().map(String::as_str)
    }

    /// Pose names in file order.
    pub fn pose_names(&self) -> impl Iterator<Item = &str> {
        self.poses.keys().map(String::as_str)
    }

    /// Sequence names in file order.
    pub fn sequence_names(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    /// Sequences that drive the given servo.
    pub fn sequences_for<'a>(&'a self, servo: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.sequences
            .iter()
            .filter(move |(_, seq)| seq.servo.as_str() == servo)
            .map(|(name, _)| name.as_str())
    }
}
