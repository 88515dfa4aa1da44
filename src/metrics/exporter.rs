use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::PinnedLruMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for cache metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", &self.metric_name(suffix), value);
    }

    fn write_gauge(&self, suffix: &str, value: usize) {
        self.write_metric("gauge", &self.metric_name(suffix), value as u64);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<PinnedLruMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &PinnedLruMetricsSnapshot) {
        self.write_counter("get_calls_total", snapshot.get_calls);
        self.write_counter("get_hits_total", snapshot.get_hits);
        self.write_counter("get_misses_total", snapshot.get_misses);
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("insert_updates_total", snapshot.insert_updates);
        self.write_counter("insert_new_total", snapshot.insert_new);
        self.write_counter("pinned_overwrites_total", snapshot.pinned_overwrites);
        self.write_counter(
            "pinned_type_conflicts_total",
            snapshot.pinned_type_conflicts,
        );
        self.write_counter("evict_calls_total", snapshot.evict_calls);
        self.write_counter("evicted_entries_total", snapshot.evicted_entries);
        self.write_counter(
            "capacity_grow_events_total",
            snapshot.capacity_grow_events,
        );
        self.write_counter(
            "capacity_shrink_events_total",
            snapshot.capacity_shrink_events,
        );
        self.write_counter(
            "remove_permanent_calls_total",
            snapshot.remove_permanent_calls,
        );
        self.write_counter(
            "remove_permanent_found_total",
            snapshot.remove_permanent_found,
        );
        self.write_counter("peek_calls_total", snapshot.peek_calls);
        self.write_counter("peek_found_total", snapshot.peek_found);
        self.write_counter("clears_total", snapshot.clears);

        self.write_gauge("cache_len", snapshot.cache_len);
        self.write_gauge("pinned_count", snapshot.pinned_count);
        self.write_gauge("capacity", snapshot.capacity);
        self.write_gauge("initial_capacity", snapshot.initial_capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_prefixed_counters_and_gauges() {
        let exporter = PrometheusTextExporter::new("pincache", Vec::new());
        let snapshot = PinnedLruMetricsSnapshot {
            get_calls: 3,
            get_hits: 2,
            capacity: 7,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE pincache_get_calls_total counter"));
        assert!(text.contains("pincache_get_calls_total 3"));
        assert!(text.contains("pincache_get_hits_total 2"));
        assert!(text.contains("# TYPE pincache_capacity gauge"));
        assert!(text.contains("pincache_capacity 7"));
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&PinnedLruMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.lines().any(|line| line == "clears_total 0"));
    }
}
