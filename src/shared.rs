//! Process-wide cache instance.
//!
//! Most applications construct one [`PinnedCache`] and pass clones of it
//! around. For code that cannot be handed a handle, [`shared`] returns a
//! lazily created instance with [`CacheConfig::default`]. Call
//! [`init_shared`] once at startup to choose a different configuration; it
//! must run before the first `shared()` call.
//!
//! ```
//! use pincache::shared::shared;
//!
//! shared().put("feature-flags", vec!["beta"], true).unwrap();
//! assert_eq!(shared().is_pinned("feature-flags"), Some(true));
//! ```

use std::sync::OnceLock;

use tracing::info;

use crate::builder::CacheConfig;
use crate::error::ConfigError;
use crate::policy::pinned_lru::{PinnedCache, PinnedLruCore};

static SHARED: OnceLock<PinnedCache> = OnceLock::new();

/// The process-wide cache, created on first use.
pub fn shared() -> &'static PinnedCache {
    SHARED.get_or_init(|| {
        let config = CacheConfig::default();
        info!(
            initial_capacity = config.initial_capacity,
            "creating shared object cache"
        );
        PinnedCache::from_core(PinnedLruCore::from_valid_config(config))
    })
}

/// Creates the process-wide cache with `config`.
///
/// # Errors
///
/// [`ConfigError`] if `config` is invalid or the shared cache already exists.
pub fn init_shared(config: CacheConfig) -> Result<&'static PinnedCache, ConfigError> {
    let cache = PinnedCache::with_config(config)?;
    SHARED
        .set(cache)
        .map_err(|_| ConfigError::new("shared cache is already initialized"))?;
    info!(
        initial_capacity = config.initial_capacity,
        growth_step = config.growth_step,
        shrink_step = config.shrink_step,
        "initialized shared object cache"
    );
    Ok(shared())
}
