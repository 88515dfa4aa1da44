//! pincache: a thread-safe LRU object cache with pinned entries and
//! adaptive capacity.
//!
//! Start with [`PinnedCache`]; see [`policy::pinned_lru`] for the eviction
//! and capacity rules.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod shared;
pub mod store;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;

pub use builder::{CacheBuilder, CacheConfig};
pub use error::{CacheError, ConfigError, InvariantError};
pub use policy::pinned_lru::{CacheStats, PinnedCache, PinnedLruCore};
pub use shared::{init_shared, shared};
pub use store::value::{CacheValue, ValueType};
