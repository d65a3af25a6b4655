//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, metrics_handler, retrieve_handler, status_handler, store_handler, AppState,
};

/// Room left in a request body for the JSON framing and the key.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/cache/store` - Store a key-value pair
/// - `GET /api/cache/retrieve/:key` - Retrieve a value by key
/// - `GET /api/cache/metrics` - Hit/miss/eviction counters
/// - `DELETE /api/cache/clear` - Drop all entries and reset counters
/// - `GET /api/cache/status` - Liveness check
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
/// - Body limit: the configured max entry size plus `BODY_OVERHEAD_BYTES`, so
///   oversized values reach the handler and get a 413 from the cache
pub fn create_router(state: AppState) -> Router {
    let body_limit = state
        .cache
        .max_entry_size_bytes()
        .saturating_add(BODY_OVERHEAD_BYTES);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let cache_routes = Router::new()
        .route("/store", post(store_handler))
        .route("/retrieve/:key", get(retrieve_handler))
        .route("/metrics", get(metrics_handler))
        .route("/clear", delete(clear_handler))
        .route("/status", get(status_handler));

    Router::new()
        .nest("/api/cache", cache_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ShardedLruCache;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let cache = ShardedLruCache::new(100, 1024, 1).unwrap();
        create_router(AppState::new(cache))
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cache/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cache/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_store_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/cache/store")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"key":"test","value":"hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_retrieve_not_found() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cache/retrieve/nonexistent")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_clear_rejects_get() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/cache/clear")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
