//! Cache Metrics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Metrics Snapshot ==
/// Point-in-time copy of the cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals
    pub misses: u64,
    /// Number of entries evicted due to LRU policy
    pub evictions: u64,
    /// hits / (hits + misses), 0.0 with no lookups
    pub hit_ratio: f64,
}

impl MetricsSnapshot {
    /// Builds a snapshot, deriving the hit ratio from the counters.
    pub fn new(hits: u64, misses: u64, evictions: u64) -> Self {
        let total = hits + misses;
        let hit_ratio = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };
        Self {
            hits,
            misses,
            evictions,
            hit_ratio,
        }
    }

    /// Total number of lookups (hits + misses).
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

impl std::iter::Sum for MetricsSnapshot {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let (hits, misses, evictions) = iter.fold((0, 0, 0), |(h, m, e), s| {
            (h + s.hits, m + s.misses, e + s.evictions)
        });
        Self::new(hits, misses, evictions)
    }
}

// == Cache Metrics ==
/// Live counters owned by a single cache instance.
///
/// Writers increment while holding the cache lock; readers take a
/// snapshot without it and may observe a slightly stale view.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Zeroes all counters.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::new(
            self.hits.load(Ordering::Relaxed),
            self.misses.load(Ordering::Relaxed),
            self.evictions.load(Ordering::Relaxed),
        )
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = CacheMetrics::new();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::new(0, 0, 0));
    }

    #[test]
    fn test_hit_ratio_no_requests() {
        let snapshot = CacheMetrics::new().snapshot();
        assert_eq!(snapshot.hit_ratio, 0.0);
    }

    #[test]
    fn test_hit_ratio_all_hits() {
        let metrics = CacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        assert_eq!(metrics.snapshot().hit_ratio, 1.0);
    }

    #[test]
    fn test_hit_ratio_all_misses() {
        let metrics = CacheMetrics::new();
        metrics.record_miss();
        metrics.record_miss();
        assert_eq!(metrics.snapshot().hit_ratio, 0.0);
    }

    #[test]
    fn test_hit_ratio_mixed() {
        let metrics = CacheMetrics::new();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_miss();
        metrics.record_miss();
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.hit_ratio, 0.25);
        assert_eq!(snapshot.lookups(), 4);
    }

    #[test]
    fn test_record_eviction() {
        let metrics = CacheMetrics::new();
        metrics.record_eviction();
        metrics.record_eviction();
        assert_eq!(metrics.snapshot().evictions, 2);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let metrics = CacheMetrics::new();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_eviction();

        metrics.reset();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::new(0, 0, 0));
    }

    #[test]
    fn test_snapshot_sum_recomputes_ratio() {
        let total: MetricsSnapshot = vec![
            MetricsSnapshot::new(3, 1, 2),
            MetricsSnapshot::new(1, 3, 0),
        ]
        .into_iter()
        .sum();

        assert_eq!(total.hits, 4);
        assert_eq!(total.misses, 4);
        assert_eq!(total.evictions, 2);
        assert_eq!(total.hit_ratio, 0.5);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let json = serde_json::to_value(MetricsSnapshot::new(1, 1, 0)).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["misses"], 1);
        assert_eq!(json["evictions"], 0);
        assert_eq!(json["hitRatio"], 0.5);
    }
}
