use crate::metrics::cell::MetricsCell;
use crate::metrics::traits::{
    CoreMetricsRecorder, PinnedMetricsReadRecorder, PinnedMetricsRecorder,
};

#[derive(Debug, Default)]
pub struct PinnedLruMetrics {
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
    pub clears: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
}

impl PinnedLruMetrics {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl CoreMetricsRecorder for PinnedLruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clears += 1;
    }
}

impl PinnedMetricsRecorder for PinnedLruMetrics {
    fn record_pinned_overwrite(&mut self) {
        self.pinned_overwrites += 1;
    }

    fn record_pinned_type_conflict(&mut self) {
        self.pinned_type_conflicts += 1;
    }

    fn record_capacity_grow(&mut self) {
        self.capacity_grow_events += 1;
    }

    fn record_capacity_shrink(&mut self) {
        self.capacity_shrink_events += 1;
    }

    fn record_remove_permanent_call(&mut self) {
        self.remove_permanent_calls += 1;
    }

    fn record_remove_permanent_found(&mut self) {
        self.remove_permanent_found += 1;
    }
}

impl PinnedMetricsReadRecorder for &PinnedLruMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_and_misses_both_count_as_calls() {
        let mut m = PinnedLruMetrics::default();
        m.record_get_hit();
        m.record_get_miss();
        m.record_get_miss();
        assert_eq!(m.get_calls, 3);
        assert_eq!(m.get_hits, 1);
        assert_eq!(m.get_misses, 2);
    }

    #[test]
    fn read_recorder_works_through_shared_ref() {
        let m = PinnedLruMetrics::default();
        (&m).record_peek_call();
        (&m).record_peek_found();
        assert_eq!(m.peek_calls.get(), 1);
        assert_eq!(m.peek_found.get(), 1);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut m = PinnedLruMetrics::default();
        m.record_capacity_grow();
        m.record_clear();
        (&m).record_peek_call();
        m.reset();
        assert_eq!(m.capacity_grow_events, 0);
        assert_eq!(m.clears, 0);
        assert_eq!(m.peek_calls.get(), 0);
    }
}
