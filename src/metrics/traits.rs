//! # Metrics Traits
//!
//! Recording, snapshotting and export are split into small traits so the
//! cache core only ever writes counters, while tests and monitoring read
//! them through snapshots.
//!
//! ```text
//!        ┌─────────────────────────────┐
//!        │     CoreMetricsRecorder     │
//!        │  get_hit/get_miss/insert    │
//!        │  evict/clear                │
//!        └──────────────┬──────────────┘
//!                       │
//!                       ▼
//!        ┌─────────────────────────────┐     ┌──────────────────────────┐
//!        │    PinnedMetricsRecorder    │     │ PinnedMetricsReadRecorder│
//!        │  pinned overwrite/conflict  │     │  peek (via &self)        │
//!        │  capacity grow/shrink       │     └──────────────────────────┘
//!        │  remove_permanent           │
//!        └─────────────────────────────┘
//!
//!   Consumption:
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Common counters for any cache.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters specific to pinned entries and adaptive capacity.
pub trait PinnedMetricsRecorder: CoreMetricsRecorder {
    fn record_pinned_overwrite(&mut self);
    fn record_pinned_type_conflict(&mut self);
    fn record_capacity_grow(&mut self);
    fn record_capacity_shrink(&mut self);
    fn record_remove_permanent_call(&mut self);
    fn record_remove_permanent_found(&mut self);
}

/// Read-path counters for `&self` methods (interior mutability).
pub trait PinnedMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Point-in-time view of recorded metrics.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
