pub use crate::builder::{CacheBuilder, CacheConfig};
pub use crate::error::{CacheError, ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::PinnedLruMetricsSnapshot;
pub use crate::policy::pinned_lru::{CacheStats, PinnedCache, PinnedLruCore};
pub use crate::shared::{init_shared, shared};
pub use crate::store::value::{CacheValue, ValueType};
pub use crate::traits::{ConcurrentCache, ObjectCache};
