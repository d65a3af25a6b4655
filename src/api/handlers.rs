//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::{MetricsSnapshot, ShardedLruCache};
use crate::config::Config;
use crate::error::{CacheError, ConfigError, Result};
use crate::models::{ClearResponse, RetrieveResponse, StatusResponse, StoreRequest, StoreResponse};

/// Cache type served by the HTTP layer.
pub type SharedCache = Arc<ShardedLruCache<String, String>>;

/// Application state shared across all handlers.
///
/// The cache serializes its own operations, so handlers call it directly
/// without an outer lock.
#[derive(Clone)]
pub struct AppState {
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: ShardedLruCache<String, String>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the cache parameters are invalid.
    pub fn from_config(config: &Config) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let cache = ShardedLruCache::new(config.capacity, config.max_entry_size_bytes, config.shards)?;
        Ok(Self::new(cache))
    }
}

/// Handler for POST /api/cache/store
///
/// Stores a key-value pair. Values over the size limit are answered with 413.
pub async fn store_handler(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoreResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let outcome = state.cache.put(req.key.clone(), req.value)?;
    debug!(key = %req.key, ?outcome, "Stored entry");

    Ok(Json(StoreResponse::new(req.key)))
}

/// Handler for GET /api/cache/retrieve/:key
///
/// Retrieves a value by key, marking it most recently used.
pub async fn retrieve_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<RetrieveResponse>> {
    match state.cache.get(&key) {
        Some(value) => Ok(Json(RetrieveResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /api/cache/metrics
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.cache.metrics())
}

/// Handler for DELETE /api/cache/clear
///
/// Drops every entry and resets the counters.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.clear();
    Json(ClearResponse::cleared())
}

/// Handler for GET /api/cache/status
///
/// Liveness probe; does not touch the cache.
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse::running())
}
