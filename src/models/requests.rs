//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the store operation (POST /api/cache/store)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: The value to store
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: String,
}

impl StoreRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    /// Value size is checked by the cache itself.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}
