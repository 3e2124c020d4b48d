//! Pose registry for named pose lookup.

use heapless::{FnvIndexMap, String};

use crate::config::{PoseConfig, SystemConfig};
use crate::error::{bounded, ConfigError, Error, PoseError, Result};

/// Maximum number of poses in the registry.
pub const MAX_POSES: usize = 32;

/// Registry for named poses.
#[derive(Debug)]
pub struct PoseRegistry {
    poses: FnvIndexMap<String<32>, PoseConfig, MAX_POSES>,
}

impl Default for PoseRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PoseRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            poses: FnvIndexMap::new(),
        }
    }

    /// Load every pose from a SystemConfig.
    pub fn from_config(config: &SystemConfig) -> Self {
        let mut registry = Self::new();
        for (name, pose) in &config.poses {
            // Capacities match, so this cannot overflow.
            let _ = registry.register(name.as_str(), pose.clone());
        }
        registry
    }

    /// Register a pose with a name, replacing any pose of the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the registry is full.
    pub fn register(&mut self, name: &str, pose: PoseConfig) -> Result<()> {
        let key = String::try_from(name)
            .map_err(|_| Error::Pose(PoseError::InvalidName(bounded("name too long"))))?;

        self.poses
            .insert(key, pose)
            .map_err(|_| Error::Pose(PoseError::InvalidName(bounded("registry full"))))?;

        Ok(())
    }

    /// Get a pose by name.
    pub fn get(&self, name: &str) -> Option<&PoseConfig> {
        let key = String::<32>::try_from(name).ok()?;
        self.poses.get(&key)
    }

    /// Get a pose by name, with error if not found.
    pub fn get_or_error(&self, name: &str) -> Result<&PoseConfig> {
        self.get(name)
            .ok_or_else(|| Error::Config(ConfigError::PoseNotFound(bounded(name))))
    }

    /// Check if a pose exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a pose by name.
    pub fn remove(&mut self, name: &str) -> Option<PoseConfig> {
        let key = String::<32>::try_from(name).ok()?;
        self.poses.remove(&key)
    }

    /// Get the number of registered poses.
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Get an iterator over pose names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.poses.keys().map(|s| s.as_str())
    }

    /// Get an iterator over poses.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PoseConfig)> {
        self.poses.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names of the poses targeting one servo.
    pub fn for_servo<'a>(&'a self, servo: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter(move |(_, pose)| pose.servo.as_str() == servo)
            .map(|(name, _)| name)
    }

    /// Clear all poses.
    pub fn clear(&mut self) {
        self.poses.clear();
    }
}
