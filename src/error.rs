//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Value rejected by the per-entry size limit
    #[error("Entry too large: {size} bytes exceeds limit of {max} bytes")]
    EntryTooLarge { size: usize, max: usize },
}

// == Config Error Enum ==
/// Invalid construction parameters, reported before the cache starts serving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cache capacity must be greater than zero")]
    ZeroCapacity,

    #[error("max entry size must be greater than zero")]
    ZeroEntrySize,

    #[error("shard count {shards} must be between 1 and capacity {capacity}")]
    InvalidShards { shards: usize, capacity: usize },

    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidValue { name: String, value: String },
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::EntryTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
