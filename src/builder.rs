//! Cache configuration and builder.
//!
//! [`CacheConfig`] holds the capacity policy of a pinned LRU cache: the
//! initial capacity (which is also the floor capacity never shrinks below),
//! how much capacity grows when every slot is pinned, and how much it shrinks
//! when a pinned entry is released.
//!
//! ## Example
//!
//! ```rust
//! use pincache::builder::CacheBuilder;
//!
//! let cache = CacheBuilder::new(2).growth_step(5).shrink_step(1).try_build().unwrap();
//! cache.put("a", 1i32, true).unwrap();
//! cache.put("b", 2i32, true).unwrap();
//! cache.put("c", 3i32, false).unwrap();
//! assert_eq!(cache.capacity(), 7);
//! ```

use crate::error::ConfigError;
use crate::policy::pinned_lru::{PinnedCache, PinnedLruCore};

/// Initial capacity of the shared cache and of `CacheConfig::default()`.
pub const DEFAULT_INITIAL_CAPACITY: usize = 64;
/// Capacity added when a new key arrives and every slot is pinned.
pub const DEFAULT_GROWTH_STEP: usize = 5;
/// Capacity released when a pinned entry is removed.
pub const DEFAULT_SHRINK_STEP: usize = 1;

/// Capacity policy for a pinned LRU cache.
///
/// | Field              | Default | Constraint                         |
/// |--------------------|---------|------------------------------------|
/// | `initial_capacity` | 64      | `> 0`; also the capacity floor     |
/// | `growth_step`      | 5       | `> 0`                              |
/// | `shrink_step`      | 1       | `0` disables shrinking             |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CacheConfig {
    pub initial_capacity: usize,
    pub growth_step: usize,
    pub shrink_step: usize,
}

impl CacheConfig {
    /// Default steps with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }

    /// Checks every constraint in the table above.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::new(
                "initial capacity must be greater than zero",
            ));
        }
        if self.growth_step == 0 {
            return Err(ConfigError::new("growth step must be greater than zero"));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_step: DEFAULT_GROWTH_STEP,
            shrink_step: DEFAULT_SHRINK_STEP,
        }
    }
}

/// Builder for [`PinnedCache`] and [`PinnedLruCore`].
#[derive(Debug, Clone)]
pub struct CacheBuilder {
    config: CacheConfig,
}

impl CacheBuilder {
    /// Create a new builder with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            config: CacheConfig::new(initial_capacity),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: CacheConfig) -> Self {
        Self { config }
    }

    pub fn growth_step(mut self, step: usize) -> Self {
        self.config.growth_step = step;
        self
    }

    pub fn shrink_step(mut self, step: usize) -> Self {
        self.config.shrink_step = step;
        self
    }

    /// The configuration built so far, unvalidated.
    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Build a thread-safe cache handle.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the configuration is invalid.
    pub fn try_build(self) -> Result<PinnedCache, ConfigError> {
        PinnedCache::with_config(self.config)
    }

    /// Build a single-threaded cache core.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the configuration is invalid.
    pub fn try_build_core(self) -> Result<PinnedLruCore, ConfigError> {
        PinnedLruCore::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CacheConfig::default();
        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.growth_step, 5);
        assert_eq!(config.shrink_step, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_initial_capacity_is_rejected() {
        let err = CacheConfig::new(0).validate().unwrap_err();
        assert!(err.message().contains("initial capacity"));
        assert!(CacheBuilder::new(0).try_build().is_err());
        assert!(CacheBuilder::new(0).try_build_core().is_err());
    }

    #[test]
    fn zero_growth_step_is_rejected() {
        let err = CacheBuilder::new(4).growth_step(0).try_build().unwrap_err();
        assert!(err.to_string().contains("growth step"));
    }

    #[test]
    fn zero_shrink_step_is_allowed() {
        let cache = CacheBuilder::new(4).shrink_step(0).try_build().unwrap();
        assert_eq!(cache.config().shrink_step, 0);
    }

    #[test]
    fn builder_carries_every_field() {
        let builder = CacheBuilder::new(3).growth_step(2).shrink_step(4);
        assert_eq!(
            builder.config(),
            CacheConfig {
                initial_capacity: 3,
                growth_step: 2,
                shrink_step: 4,
            }
        );

        let core = builder.try_build_core().unwrap();
        assert_eq!(core.capacity(), 3);
        assert_eq!(core.initial_capacity(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_with_defaults() {
        let config: CacheConfig = serde_json::from_str(r#"{ "initial_capacity": 10 }"#).unwrap();
        assert_eq!(config, CacheConfig::new(10));

        let text = serde_json::to_string(&config).unwrap();
        assert!(text.contains("\"growth_step\":5"));
    }
}
