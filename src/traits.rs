//! # Object Cache Interface
//!
//! [`ObjectCache`] is the seam between the cache and the components that use
//! it. Consumers take `&dyn ObjectCache` (or a generic `C: ObjectCache`) so
//! they can be handed the process-wide cache, a private instance, or a test
//! double.
//!
//! ```text
//!   ┌──────────────────────────────┐
//!   │        ObjectCache           │   Send + Sync, all methods take &self
//!   │                              │
//!   │  get(&str) → CacheValue      │
//!   │  put_value(&str, v, pinned)  │
//!   │  remove_permanent(&str)      │
//!   │  clear()                     │
//!   │                              │
//!   │  put<T>(…)      (provided)   │
//!   │  get_as<T>(…)   (provided)   │
//!   └──────────────┬───────────────┘
//!                  │
//!                  ▼
//!           PinnedCache
//! ```
//!
//! ## Example
//!
//! ```
//! use pincache::traits::ObjectCache;
//! use pincache::PinnedCache;
//!
//! fn load_name(cache: &dyn ObjectCache, id: u32) -> String {
//!     let key = format!("user:{}", id);
//!     match cache.get(&key) {
//!         Ok(value) => value.downcast_ref::<String>().cloned().unwrap_or_default(),
//!         Err(_) => {
//!             let name = format!("user-{}", id);
//!             let _ = cache.put_value(&key, pincache::CacheValue::new(name.clone()), false);
//!             name
//!         },
//!     }
//! }
//!
//! let cache = PinnedCache::new(8).unwrap();
//! assert_eq!(load_name(&cache, 7), "user-7");
//! assert!(cache.contains("user:7"));
//! ```

use std::any::Any;
use std::sync::Arc;

use crate::error::CacheError;
use crate::policy::pinned_lru::PinnedCache;
use crate::store::value::CacheValue;

/// Thread-safe string-keyed object cache.
pub trait ObjectCache: Send + Sync {
    /// Returns the value and marks the entry most recently used.
    fn get(&self, key: &str) -> Result<CacheValue, CacheError>;

    /// Inserts or overwrites `key`; `pinned` entries are never evicted.
    fn put_value(&self, key: &str, value: CacheValue, pinned: bool) -> Result<(), CacheError>;

    /// Removes a pinned entry.
    fn remove_permanent(&self, key: &str) -> Result<(), CacheError>;

    /// Removes every entry.
    fn clear(&self);

    /// Wraps and stores an owned value.
    fn put<T: Any + Send + Sync>(&self, key: &str, value: T, pinned: bool) -> Result<(), CacheError>
    where
        Self: Sized,
    {
        self.put_value(key, CacheValue::new(value), pinned)
    }

    /// Typed [`get`](Self::get).
    ///
    /// Unlike [`PinnedCache::get_as`], a type mismatch here is detected after
    /// the lookup, so the entry has already been promoted.
    fn get_as<T: Any + Send + Sync>(&self, key: &str) -> Result<Arc<T>, CacheError>
    where
        Self: Sized,
    {
        let value = self.get(key)?;
        value.downcast::<T>().ok_or_else(|| CacheError::TypeMismatch {
            key: key.to_owned(),
            stored: value.value_type().name(),
            requested: std::any::type_name::<T>(),
        })
    }
}

/// Marker trait for caches that are safe to share across threads.
pub trait ConcurrentCache: Send + Sync {}

impl ObjectCache for PinnedCache {
    fn get(&self, key: &str) -> Result<CacheValue, CacheError> {
        PinnedCache::get(self, key)
    }

    fn put_value(&self, key: &str, value: CacheValue, pinned: bool) -> Result<(), CacheError> {
        PinnedCache::put_value(self, key, value, pinned)
    }

    fn remove_permanent(&self, key: &str) -> Result<(), CacheError> {
        PinnedCache::remove_permanent(self, key)
    }

    fn clear(&self) {
        PinnedCache::clear(self)
    }

    fn get_as<T: Any + Send + Sync>(&self, key: &str) -> Result<Arc<T>, CacheError> {
        PinnedCache::get_as(self, key)
    }
}

impl ConcurrentCache for PinnedCache {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_concurrent<C: ConcurrentCache>() {}

    #[test]
    fn pinned_cache_is_concurrent() {
        assert_concurrent::<PinnedCache>();
    }

    #[test]
    fn works_through_trait_object() {
        let cache = PinnedCache::new(2).unwrap();
        let dyn_cache: &dyn ObjectCache = &cache;

        dyn_cache.put_value("a", CacheValue::new(1u8), true).unwrap();
        assert!(dyn_cache.get("a").unwrap().is::<u8>());
        dyn_cache.remove_permanent("a").unwrap();
        assert!(dyn_cache.get("a").unwrap_err().is_not_found());
    }

    #[test]
    fn provided_methods_use_typed_values() {
        let cache = PinnedCache::new(2).unwrap();
        ObjectCache::put(&cache, "n", 5i32, false).unwrap();
        assert_eq!(*ObjectCache::get_as::<i32>(&cache, "n").unwrap(), 5);
        assert!(matches!(
            ObjectCache::get_as::<u64>(&cache, "n"),
            Err(CacheError::TypeMismatch { .. })
        ));

        ObjectCache::clear(&cache);
        assert!(cache.is_empty());
    }
}
