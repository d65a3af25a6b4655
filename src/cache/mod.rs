//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with LRU eviction, hit/miss
//! metrics and a per-entry size limit.

mod entry;
mod list;
mod lru;
mod metrics;
mod sharded;


// Re-export public types
pub use entry::EntrySize;
pub(crate) use list::RecencyList;
pub use lru::{LruCache, PutOutcome};
pub use metrics::{CacheMetrics, MetricsSnapshot};
pub use sharded::ShardedLruCache;

// == Public Constants ==
/// Default maximum number of live entries
pub const DEFAULT_CAPACITY: usize = 1000;

/// Default maximum value size in bytes
pub const DEFAULT_MAX_ENTRY_SIZE_BYTES: usize = 1024 * 1024; // 1 MB
