//! # Pinned LRU Cache
//!
//! A string-keyed object cache that evicts by recency, never evicts pinned
//! ("permanent") entries, and grows its capacity instead of failing when
//! every slot is pinned.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                             PinnedCache                              │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │                 Arc<Mutex<PinnedLruCore>>                    │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   │                                │                                     │
//!   │                                ▼                                     │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │                        PinnedLruCore                         │   │
//!   │   │                                                              │   │
//!   │   │  index: FxHashMap<String, NodeId> ─────┐                     │   │
//!   │   │                                        ▼                     │   │
//!   │   │  order: RecencyList<Entry>                                   │   │
//!   │   │    head ─► [c] ◄──► [P] ◄──► [b] ◄──► [a] ◄── tail           │   │
//!   │   │            MRU                          LRU                  │   │
//!   │   │                                                              │   │
//!   │   │  unpinned: RecencyList<NodeId>  (same relative order,        │   │
//!   │   │    head ─► [c] ◄──► [b] ◄──► [a] ◄── tail   pinned skipped)  │   │
//!   │   │                                                              │   │
//!   │   │  capacity, pinned_count, config                              │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The unpinned list mirrors `order` with pinned entries left out, so its
//! tail is always the least recently used unpinned entry. Victim selection
//! is O(1) no matter how many pinned entries sit at the cold end of `order`.
//!
//! ## Insert Flow (new key, cache full)
//!
//! ```text
//!   len == capacity ?
//!        │ yes
//!        ▼
//!   pinned_count == capacity ? ── yes ──► capacity += growth_step
//!        │ no
//!        ▼
//!   evict unpinned.tail  (LRU among unpinned)
//! ```
//!
//! ## Overwrite Rules
//!
//! | Existing entry | New value            | Result                                   |
//! |----------------|----------------------|------------------------------------------|
//! | unpinned       | any type, any pin    | value, type and pin flag replaced        |
//! | pinned         | same type            | value replaced, stays pinned             |
//! | pinned         | different type       | `PinnedTypeMismatch`, cache unchanged    |
//!
//! Every successful overwrite and every `get` moves the entry to MRU.
//!
//! ## Capacity Bookkeeping
//!
//! | Event                              | Capacity change                                  |
//! |------------------------------------|--------------------------------------------------|
//! | new key, every slot pinned         | `+ growth_step`                                  |
//! | `remove_permanent` on pinned entry | `- shrink_step`, floored at `initial` and `len`  |
//! | `clear`                            | reset to `initial_capacity`                      |
//!
//! ## Thread Safety
//!
//! - `PinnedLruCore`: **NOT thread-safe**, single owner only.
//! - `PinnedCache`: cloneable handle; every public operation runs under one
//!   `parking_lot::Mutex`, so no caller observes a half-finished eviction or
//!   capacity change.
//!
//! ## Example Usage
//!
//! ```
//! use pincache::PinnedCache;
//!
//! let cache = PinnedCache::new(2).unwrap();
//! cache.put("a", 1i32, false).unwrap();
//! cache.put("b", 2i32, false).unwrap();
//! cache.put("c", 3i32, false).unwrap();
//!
//! assert!(cache.get("a").unwrap_err().is_not_found());
//! assert_eq!(*cache.get_as::<i32>("b").unwrap(), 2);
//! assert_eq!(*cache.get_as::<i32>("c").unwrap(), 3);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::builder::CacheConfig;
use crate::ds::recency_list::{NodeId, RecencyList};
use crate::error::{CacheError, ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::PinnedLruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::PinnedLruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsReset, MetricsSnapshotProvider, PinnedMetricsReadRecorder,
    PinnedMetricsRecorder,
};
use crate::store::value::{CacheValue, ValueType};

#[derive(Debug)]
struct Entry {
    key: String,
    value: CacheValue,
    pinned: bool,
    /// Position in the unpinned list; `None` exactly when `pinned`.
    unpinned_node: Option<NodeId>,
}

/// Sizes observed together under one lock acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub len: usize,
    pub pinned_count: usize,
    pub capacity: usize,
    pub initial_capacity: usize,
}

/// Single-threaded pinned LRU cache core.
///
/// Wrap it in [`PinnedCache`] to share it between threads.
pub struct PinnedLruCore {
    index: FxHashMap<String, NodeId>,
    order: RecencyList<Entry>,
    unpinned: RecencyList<NodeId>,
    capacity: usize,
    pinned_count: usize,
    config: CacheConfig,
    #[cfg(feature = "metrics")]
    metrics: PinnedLruMetrics,
}

impl PinnedLruCore {
    /// Creates a cache with default growth/shrink steps.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if `initial_capacity` is zero.
    ///
    /// # Example
    /// ```
    /// use pincache::policy::pinned_lru::PinnedLruCore;
    ///
    /// let cache = PinnedLruCore::new(16).unwrap();
    /// assert_eq!(cache.capacity(), 16);
    /// assert!(PinnedLruCore::new(0).is_err());
    /// ```
    pub fn new(initial_capacity: usize) -> Result<Self, ConfigError> {
        Self::with_config(CacheConfig::new(initial_capacity))
    }

    /// Creates a cache from a full configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if [`CacheConfig::validate`] fails.
    pub fn with_config(config: CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    pub(crate) fn from_valid_config(config: CacheConfig) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(config.initial_capacity, Default::default()),
            order: RecencyList::with_capacity(config.initial_capacity),
            unpinned: RecencyList::with_capacity(config.initial_capacity),
            capacity: config.initial_capacity,
            pinned_count: 0,
            config,
            #[cfg(feature = "metrics")]
            metrics: PinnedLruMetrics::default(),
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Current maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Capacity floor, fixed at construction.
    pub fn initial_capacity(&self) -> usize {
        self.config.initial_capacity
    }

    pub fn pinned_count(&self) -> usize {
        self.pinned_count
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            len: self.len(),
            pinned_count: self.pinned_count,
            capacity: self.capacity,
            initial_capacity: self.config.initial_capacity,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// `Some(pinned)` if the key is cached, `None` otherwise.
    pub fn is_pinned(&self, key: &str) -> Option<bool> {
        self.entry(key).map(|entry| entry.pinned)
    }

    /// Returns the value and marks the entry most recently used.
    ///
    /// # Errors
    ///
    /// [`CacheError::NotFound`] if the key is not cached.
    pub fn get(&mut self, key: &str) -> Result<CacheValue, CacheError> {
        let Some(&id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            trace!(key, "cache miss");
            return Err(CacheError::NotFound(key.to_owned()));
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.promote(id);

        #[cfg(debug_assertions)]
        self.debug_validate();

        self.order
            .get(id)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| CacheError::NotFound(key.to_owned()))
    }

    /// [`get`](Self::get) followed by a downcast to `T`.
    ///
    /// A type mismatch is reported before the entry is touched, so a failed
    /// typed read does not change recency.
    ///
    /// # Errors
    ///
    /// [`CacheError::NotFound`] or [`CacheError::TypeMismatch`].
    pub fn get_as<T: Any + Send + Sync>(&mut self, key: &str) -> Result<Arc<T>, CacheError> {
        if let Some(entry) = self.entry(key) {
            let stored = entry.value.value_type();
            if stored != ValueType::of::<T>() {
                return Err(type_mismatch::<T>(key, stored));
            }
        }
        let value = self.get(key)?;
        value
            .downcast::<T>()
            .ok_or_else(|| type_mismatch::<T>(key, value.value_type()))
    }

    /// Returns the value without affecting recency.
    pub fn peek(&self, key: &str) -> Option<CacheValue> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        let value = self.entry(key).map(|entry| entry.value.clone());

        #[cfg(feature = "metrics")]
        if value.is_some() {
            (&self.metrics).record_peek_found();
        }

        value
    }

    /// Inserts or overwrites `key`.
    ///
    /// # Errors
    ///
    /// - [`CacheError::InvalidArgument`] if `key` is empty.
    /// - [`CacheError::PinnedTypeMismatch`] if `key` is pinned and `value`
    ///   has a different type than the stored one.
    ///
    /// The cache is unchanged on error.
    pub fn insert(&mut self, key: &str, value: CacheValue, pinned: bool) -> Result<(), CacheError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if key.is_empty() {
            return Err(CacheError::InvalidArgument(
                "cache key must not be empty".to_owned(),
            ));
        }

        if let Some(&id) = self.index.get(key) {
            return self.overwrite(id, key, value, pinned);
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        self.make_room();

        let id = self.order.push_front(Entry {
            key: key.to_owned(),
            value,
            pinned,
            unpinned_node: None,
        });
        if pinned {
            self.pinned_count += 1;
        } else {
            let node = self.unpinned.push_front(id);
            if let Some(entry) = self.order.get_mut(id) {
                entry.unpinned_node = Some(node);
            }
        }
        self.index.insert(key.to_owned(), id);

        #[cfg(debug_assertions)]
        self.debug_validate();

        Ok(())
    }

    /// Removes a pinned entry and releases one step of grown capacity.
    ///
    /// Capacity becomes `max(capacity - shrink_step, initial_capacity, len)`.
    ///
    /// # Errors
    ///
    /// [`CacheError::NotFound`] for an absent key and
    /// [`CacheError::NotPinned`] for an unpinned one; the cache is unchanged
    /// in both cases.
    pub fn remove_permanent(&mut self, key: &str) -> Result<(), CacheError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_permanent_call();

        let Some(&id) = self.index.get(key) else {
            return Err(CacheError::NotFound(key.to_owned()));
        };
        if !self.order.get(id).is_some_and(|entry| entry.pinned) {
            return Err(CacheError::NotPinned(key.to_owned()));
        }

        self.order.remove(id);
        self.index.remove(key);
        self.pinned_count -= 1;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_permanent_found();

        let target = self
            .capacity
            .saturating_sub(self.config.shrink_step)
            .max(self.config.initial_capacity)
            .max(self.index.len());
        if target < self.capacity {
            debug!(
                key,
                from = self.capacity,
                to = target,
                "shrinking cache capacity after pinned entry removal"
            );
            self.capacity = target;
            #[cfg(feature = "metrics")]
            self.metrics.record_capacity_shrink();
        }

        #[cfg(debug_assertions)]
        self.debug_validate();

        Ok(())
    }

    /// Removes every entry and resets capacity to the initial capacity.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.order.clear();
        self.unpinned.clear();
        self.pinned_count = 0;
        self.capacity = self.config.initial_capacity;
    }

    /// Keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.order.iter().map(|(_, entry)| entry.key.clone()).collect()
    }

    /// Verifies every structural invariant of the cache.
    ///
    /// # Errors
    ///
    /// [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "len {} exceeds capacity {}",
                self.index.len(),
                self.capacity
            )));
        }
        if self.capacity < self.config.initial_capacity {
            return Err(InvariantError::new(format!(
                "capacity {} below initial capacity {}",
                self.capacity, self.config.initial_capacity
            )));
        }
        if self.order.len() != self.index.len() {
            return Err(InvariantError::new(format!(
                "recency list holds {} entries, index holds {}",
                self.order.len(),
                self.index.len()
            )));
        }

        let mut pinned = 0usize;
        let mut expected_unpinned = Vec::with_capacity(self.unpinned.len());
        for (id, entry) in self.order.iter() {
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                _ => {
                    return Err(InvariantError::new(format!(
                        "entry `{}` is not indexed at its list position",
                        entry.key
                    )));
                },
            }
            if entry.pinned != entry.unpinned_node.is_none() {
                return Err(InvariantError::new(format!(
                    "entry `{}` pin flag disagrees with unpinned list membership",
                    entry.key
                )));
            }
            if entry.pinned {
                pinned += 1;
            } else {
                expected_unpinned.push(id);
            }
        }
        if pinned != self.pinned_count {
            return Err(InvariantError::new(format!(
                "pinned_count {} but {} pinned entries",
                self.pinned_count, pinned
            )));
        }

        let actual_unpinned: Vec<NodeId> = self.unpinned.iter().map(|(_, id)| *id).collect();
        if actual_unpinned != expected_unpinned {
            return Err(InvariantError::new(
                "unpinned list is out of step with the recency list",
            ));
        }
        for (node, &id) in self.unpinned.iter() {
            if self.order.get(id).and_then(|entry| entry.unpinned_node) != Some(node) {
                return Err(InvariantError::new(format!(
                    "unpinned node {:?} does not point back from entry {:?}",
                    node, id
                )));
            }
        }

        Ok(())
    }

    fn entry(&self, key: &str) -> Option<&Entry> {
        self.index.get(key).and_then(|&id| self.order.get(id))
    }

    fn promote(&mut self, id: NodeId) {
        let unpinned_node = self.order.get(id).and_then(|entry| entry.unpinned_node);
        self.order.move_to_front(id);
        if let Some(node) = unpinned_node {
            self.unpinned.move_to_front(node);
        }
    }

    fn overwrite(
        &mut self,
        id: NodeId,
        key: &str,
        value: CacheValue,
        pinned: bool,
    ) -> Result<(), CacheError> {
        let Some(entry) = self.order.get_mut(id) else {
            return Err(CacheError::NotFound(key.to_owned()));
        };

        if entry.pinned {
            let stored = entry.value.value_type();
            let incoming = value.value_type();
            if stored != incoming {
                #[cfg(feature = "metrics")]
                self.metrics.record_pinned_type_conflict();
                debug!(
                    key,
                    stored = stored.name(),
                    incoming = incoming.name(),
                    "rejected pinned overwrite with a different type"
                );
                return Err(CacheError::PinnedTypeMismatch {
                    key: key.to_owned(),
                    expected: stored.name(),
                    actual: incoming.name(),
                });
            }
            entry.value = value;
            self.order.move_to_front(id);

            #[cfg(feature = "metrics")]
            {
                self.metrics.record_insert_update();
                self.metrics.record_pinned_overwrite();
            }
            return Ok(());
        }

        let unpinned_node = entry.unpinned_node;
        entry.value = value;
        entry.pinned = pinned;
        if pinned {
            entry.unpinned_node = None;
        }

        self.order.move_to_front(id);
        if let Some(node) = unpinned_node {
            if pinned {
                self.unpinned.remove(node);
                self.pinned_count += 1;
            } else {
                self.unpinned.move_to_front(node);
            }
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_update();

        #[cfg(debug_assertions)]
        self.debug_validate();

        Ok(())
    }

    /// Frees one slot for a new key, or grows capacity if all slots are pinned.
    fn make_room(&mut self) {
        if self.index.len() < self.capacity {
            return;
        }

        if self.pinned_count < self.capacity && self.evict_lru_unpinned() {
            return;
        }
        self.grow();
    }

    fn evict_lru_unpinned(&mut self) -> bool {
        let Some(node) = self.unpinned.back_id() else {
            return false;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let Some(id) = self.unpinned.remove(node) else {
            return false;
        };
        let Some(entry) = self.order.remove(id) else {
            return false;
        };
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();

        debug!(
            key = %entry.key,
            capacity = self.capacity,
            "evicted least recently used entry"
        );
        true
    }

    fn grow(&mut self) {
        let grown = self.capacity.saturating_add(self.config.growth_step);
        debug!(
            from = self.capacity,
            to = grown,
            pinned = self.pinned_count,
            "every slot is pinned, growing cache capacity"
        );
        self.capacity = grown;

        #[cfg(feature = "metrics")]
        self.metrics.record_capacity_grow();
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        self.order.debug_validate_invariants();
        self.unpinned.debug_validate_invariants();
        debug_assert!(self.index.len() <= self.capacity);
        debug_assert!(self.capacity >= self.config.initial_capacity);
        debug_assert_eq!(self.order.len(), self.index.len());
        debug_assert_eq!(self.order.len(), self.unpinned.len() + self.pinned_count);
    }
}

fn type_mismatch<T: Any>(key: &str, stored: ValueType) -> CacheError {
    CacheError::TypeMismatch {
        key: key.to_owned(),
        stored: stored.name(),
        requested: std::any::type_name::<T>(),
    }
}

#[cfg(feature = "metrics")]
impl PinnedLruCore {
    pub fn metrics_snapshot(&self) -> PinnedLruMetricsSnapshot {
        PinnedLruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            pinned_overwrites: self.metrics.pinned_overwrites,
            pinned_type_conflicts: self.metrics.pinned_type_conflicts,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            capacity_grow_events: self.metrics.capacity_grow_events,
            capacity_shrink_events: self.metrics.capacity_shrink_events,
            remove_permanent_calls: self.metrics.remove_permanent_calls,
            remove_permanent_found: self.metrics.remove_permanent_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            clears: self.metrics.clears,
            cache_len: self.index.len(),
            pinned_count: self.pinned_count,
            capacity: self.capacity,
            initial_capacity: self.config.initial_capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<PinnedLruMetricsSnapshot> for PinnedLruCore {
    fn snapshot(&self) -> PinnedLruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl MetricsReset for PinnedLruCore {
    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl fmt::Debug for PinnedLruCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinnedLruCore")
            .field("len", &self.len())
            .field("pinned_count", &self.pinned_count)
            .field("capacity", &self.capacity)
            .field("initial_capacity", &self.config.initial_capacity)
            .finish_non_exhaustive()
    }
}

impl Default for PinnedLruCore {
    /// Creates a cache with [`CacheConfig::default`].
    fn default() -> Self {
        Self::from_valid_config(CacheConfig::default())
    }
}

/// Thread-safe pinned LRU cache handle.
///
/// Cloning is cheap and every clone refers to the same cache. Construct one
/// at startup and hand it to the components that need it, or use
/// [`shared`](crate::shared::shared) for the lazily created process-wide
/// instance.
#[derive(Clone)]
pub struct PinnedCache {
    inner: Arc<Mutex<PinnedLruCore>>,
}

impl PinnedCache {
    /// Creates a cache with default growth/shrink steps.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if `initial_capacity` is zero.
    pub fn new(initial_capacity: usize) -> Result<Self, ConfigError> {
        PinnedLruCore::new(initial_capacity).map(Self::from_core)
    }

    /// Creates a cache from a full configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] if the configuration is invalid.
    pub fn with_config(config: CacheConfig) -> Result<Self, ConfigError> {
        PinnedLruCore::with_config(config).map(Self::from_core)
    }

    /// Wraps an existing core.
    pub fn from_core(core: PinnedLruCore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(core)),
        }
    }

    /// Returns the value and marks the entry most recently used.
    ///
    /// # Errors
    ///
    /// [`CacheError::NotFound`] if the key is not cached.
    ///
    /// # Example
    ///
    /// ```
    /// use pincache::PinnedCache;
    ///
    /// let cache = PinnedCache::new(4).unwrap();
    /// cache.put("user:1", String::from("ada"), false).unwrap();
    ///
    /// let value = cache.get("user:1").unwrap();
    /// assert_eq!(value.downcast_ref::<String>().unwrap(), "ada");
    /// assert!(cache.get("user:2").is_err());
    /// ```
    pub fn get(&self, key: &str) -> Result<CacheValue, CacheError> {
        self.inner.lock().get(key)
    }

    /// Typed [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// [`CacheError::NotFound`] or [`CacheError::TypeMismatch`].
    pub fn get_as<T: Any + Send + Sync>(&self, key: &str) -> Result<Arc<T>, CacheError> {
        self.inner.lock().get_as(key)
    }

    /// Returns the value without affecting recency.
    pub fn peek(&self, key: &str) -> Option<CacheValue> {
        self.inner.lock().peek(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn is_pinned(&self, key: &str) -> Option<bool> {
        self.inner.lock().is_pinned(key)
    }

    /// Stores an owned value.
    ///
    /// To share an existing `Arc<T>` without re-wrapping it (and with type
    /// tag `T` rather than `Arc<T>`), use [`put_arc`](Self::put_arc).
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] or [`CacheError::PinnedTypeMismatch`].
    pub fn put<T: Any + Send + Sync>(&self, key: &str, value: T, pinned: bool) -> Result<(), CacheError> {
        self.put_value(key, CacheValue::new(value), pinned)
    }

    /// Stores a shared value; later reads return the same allocation.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] or [`CacheError::PinnedTypeMismatch`].
    ///
    /// # Example
    ///
    /// ```
    /// use pincache::PinnedCache;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let cache = PinnedCache::new(4).unwrap();
    /// let state = Arc::new(Mutex::new(vec![1]));
    /// cache.put_arc("state", Arc::clone(&state), true).unwrap();
    ///
    /// state.lock().unwrap().push(2);
    /// let read = cache.get_as::<Mutex<Vec<i32>>>("state").unwrap();
    /// assert_eq!(*read.lock().unwrap(), vec![1, 2]);
    /// ```
    pub fn put_arc<T: Any + Send + Sync>(
        &self,
        key: &str,
        value: Arc<T>,
        pinned: bool,
    ) -> Result<(), CacheError> {
        self.put_value(key, CacheValue::from_arc(value), pinned)
    }

    /// Stores an already wrapped value.
    ///
    /// # Errors
    ///
    /// [`CacheError::InvalidArgument`] or [`CacheError::PinnedTypeMismatch`].
    pub fn put_value(&self, key: &str, value: CacheValue, pinned: bool) -> Result<(), CacheError> {
        self.inner.lock().insert(key, value, pinned)
    }

    /// Removes a pinned entry and releases one step of grown capacity.
    ///
    /// # Errors
    ///
    /// [`CacheError::NotFound`] or [`CacheError::NotPinned`].
    pub fn remove_permanent(&self, key: &str) -> Result<(), CacheError> {
        self.inner.lock().remove_permanent(key)
    }

    /// Removes every entry and resets capacity to the initial capacity.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn initial_capacity(&self) -> usize {
        self.inner.lock().initial_capacity()
    }

    pub fn pinned_count(&self) -> usize {
        self.inner.lock().pinned_count()
    }

    pub fn config(&self) -> CacheConfig {
        self.inner.lock().config()
    }

    /// Length, pin count and capacities read atomically.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.inner.lock().keys_by_recency()
    }

    /// See [`PinnedLruCore::check_invariants`].
    ///
    /// # Errors
    ///
    /// [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.lock().check_invariants()
    }
}

impl Default for PinnedCache {
    /// Creates a cache with [`CacheConfig::default`].
    fn default() -> Self {
        Self::from_core(PinnedLruCore::default())
    }
}

impl fmt::Debug for PinnedCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("PinnedCache")
            .field("len", &cache.len())
            .field("pinned_count", &cache.pinned_count())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "metrics")]
impl PinnedCache {
    pub fn metrics_snapshot(&self) -> PinnedLruMetricsSnapshot {
        self.inner.lock().metrics_snapshot()
    }

    pub fn reset_metrics(&self) {
        self.inner.lock().reset_metrics();
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<PinnedLruMetricsSnapshot> for PinnedCache {
    fn snapshot(&self) -> PinnedLruMetricsSnapshot {
        self.metrics_snapshot()
    }
}
