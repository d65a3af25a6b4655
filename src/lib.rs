//! Titan Cache - An in-memory LRU cache server
//!
//! Fixed-capacity key/value storage with least-recently-used eviction,
//! hit/miss/eviction metrics and a per-entry size limit.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{LruCache, MetricsSnapshot, PutOutcome, ShardedLruCache};
pub use config::Config;
pub use error::{CacheError, ConfigError};
pub use tasks::spawn_metrics_reporter;
