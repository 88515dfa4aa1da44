/// Counters and gauges of a [`PinnedLruCore`](crate::policy::pinned_lru::PinnedLruCore),
/// captured under the cache lock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PinnedLruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub pinned_overwrites: u64,
    pub pinned_type_conflicts: u64,

    pub evict_calls: u64,
    pub evicted_entries: u64,

    pub capacity_grow_events: u64,
    pub capacity_shrink_events: u64,

    pub remove_permanent_calls: u64,
    pub remove_permanent_found: u64,

    pub peek_calls: u64,
    pub peek_found: u64,

    pub clears: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub pinned_count: usize,
    pub capacity: usize,
    pub initial_capacity: usize,
}

impl PinnedLruMetricsSnapshot {
    /// Fraction of `get` calls that hit, or `0.0` before any call.
    pub fn hit_ratio(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
