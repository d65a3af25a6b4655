//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the retrieve operation (GET /api/cache/retrieve/:key)
#[derive(Debug, Clone, Serialize)]
pub struct RetrieveResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl RetrieveResponse {
    /// Creates a new RetrieveResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the store operation (POST /api/cache/store)
#[derive(Debug, Clone, Serialize)]
pub struct StoreResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: String,
}

impl StoreResponse {
    /// Creates a new StoreResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' stored successfully", key),
            key,
        }
    }
}

/// Response body for the clear operation (DELETE /api/cache/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

impl ClearResponse {
    pub fn cleared() -> Self {
        Self {
            message: "Cache cleared and metrics reset".to_string(),
        }
    }
}

/// Response body for the status endpoint (GET /api/cache/status)
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Liveness status (always "running")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl StatusResponse {
    /// Creates a new StatusResponse with current timestamp
    pub fn running() -> Self {
        Self {
            status: "running".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
