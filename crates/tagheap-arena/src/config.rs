//! Arena configuration parameters.

use tagheap_core::{ConfigError, HEADER_SIZE, MAX_BLOCK_SIZE};

/// Configuration for a [`TagArena`](crate::TagArena).
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Total arena size in bytes, headers included.
    ///
    /// Default: 4096. Must lie in
    /// [`MIN_CAPACITY`](Self::MIN_CAPACITY)..=[`MAX_CAPACITY`](Self::MAX_CAPACITY).
    pub capacity: usize,

    /// Run a full coalesce pass before each first-fit scan.
    ///
    /// Release already leaves no adjacent free blocks behind, so this pass
    /// normally finds nothing to merge. It stays on by default so that an
    /// arena whose chain was left unmerged still satisfies requests that
    /// only fit after merging.
    pub merge_on_alloc: bool,
}

impl ArenaConfig {
    /// Default arena size in bytes.
    pub const DEFAULT_CAPACITY: usize = 4096;

    /// Room for one header and a single payload byte.
    pub const MIN_CAPACITY: usize = HEADER_SIZE + 1;

    /// Largest arena whose initial block size still fits in a header.
    pub const MAX_CAPACITY: usize = HEADER_SIZE + MAX_BLOCK_SIZE;

    /// Create a config for an arena of `capacity` bytes.
    ///
    /// Uses default values for all other parameters.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            merge_on_alloc: true,
        }
    }

    /// Set whether allocation runs a coalesce pass before scanning.
    pub fn with_merge_on_alloc(mut self, enabled: bool) -> Self {
        self.merge_on_alloc = enabled;
        self
    }

    /// Largest single request an arena with this config can satisfy.
    pub fn max_request(&self) -> usize {
        self.capacity.saturating_sub(HEADER_SIZE)
    }

    /// Check that the capacity can be described by the header encoding.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < Self::MIN_CAPACITY {
            return Err(ConfigError::CapacityTooSmall {
                capacity: self.capacity,
                min: Self::MIN_CAPACITY,
            });
        }
        if self.capacity > Self::MAX_CAPACITY {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
                max: Self::MAX_CAPACITY,
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_4k_with_merge() {
        let config = ArenaConfig::default();
        assert_eq!(config.capacity, 4096);
        assert!(config.merge_on_alloc);
        assert_eq!(config.max_request(), 4094);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_capacity_below_one_payload_byte() {
        let err = ArenaConfig::new(2).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::CapacityTooSmall {
                capacity: 2,
                min: 3
            }
        );
        assert!(ArenaConfig::new(3).validate().is_ok());
    }

    #[test]
    fn rejects_capacity_beyond_header_range() {
        assert!(ArenaConfig::new(ArenaConfig::MAX_CAPACITY).validate().is_ok());
        let err = ArenaConfig::new(ArenaConfig::MAX_CAPACITY + 1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigError::CapacityTooLarge { .. }));
    }

    #[test]
    fn builder_toggles_merge() {
        let config = ArenaConfig::new(64).with_merge_on_alloc(false);
        assert!(!config.merge_on_alloc);
        assert_eq!(config.capacity, 64);
    }
}
