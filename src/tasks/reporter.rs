//! Metrics Reporter Task
//!
//! Background task that periodically logs cache metrics.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::api::SharedCache;

/// Spawns a background task that logs a metrics snapshot every interval.
///
/// The task runs until aborted. It reads the lock-free counters and the
/// entry count, so it never holds the cache lock across a sleep.
///
/// # Arguments
/// * `cache` - Shared cache to report on
/// * `interval_secs` - Seconds between reports, must be non-zero
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_metrics_reporter(cache: SharedCache, interval_secs: u64) -> JoinHandle<()> {
    let period = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!("Starting metrics reporter with interval of {}s", period.as_secs());

        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let metrics = cache.metrics();
            info!(
                hits = metrics.hits,
                misses = metrics.misses,
                evictions = metrics.evictions,
                hit_ratio = metrics.hit_ratio,
                entries = cache.len(),
                "Cache metrics"
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::cache::ShardedLruCache;

    fn shared_cache() -> SharedCache {
        Arc::new(ShardedLruCache::new(10, 64, 1).unwrap())
    }

    #[tokio::test]
    async fn test_reporter_keeps_running() {
        let handle = spawn_metrics_reporter(shared_cache(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(!handle.is_finished(), "Reporter should loop until aborted");

        handle.abort();
    }

    #[tokio::test]
    async fn test_reporter_can_be_aborted() {
        let cache = shared_cache();
        let handle = spawn_metrics_reporter(cache.clone(), 1);

        handle.abort();

        let result = handle.await;
        assert!(result.unwrap_err().is_cancelled());
        // Reporter only reads, so the cache is untouched
        assert_eq!(cache.metrics().lookups(), 0);
    }
}
