//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `POST /api/cache/store` - Store a key-value pair
//! - `GET /api/cache/retrieve/:key` - Retrieve a value by key
//! - `GET /api/cache/metrics` - Cache metrics
//! - `DELETE /api/cache/clear` - Clear entries and metrics
//! - `GET /api/cache/status` - Liveness check

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
