//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{delete_handler, get_handler, health_handler, set_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST|PUT /set?key=..&value=..&ttl=..` - Store a key-value pair
/// - `GET /get?key=..` - Retrieve a value by key
/// - `DELETE /delete?key=..` - Delete a key
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/set", post(set_handler).put(set_handler))
        .route("/get", get(get_handler))
        .route("/delete", delete(delete_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::Cache;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::time::Duration;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        create_router(AppState::new(Cache::new(100, Duration::from_secs(300))))
    }

    async fn status_of(app: Router, method: &str, uri: &str) -> StatusCode {
        app.oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
        .status()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        assert_eq!(status_of(create_test_app(), "GET", "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_set_endpoint_accepts_post_and_put() {
        let app = create_test_app();
        assert_eq!(
            status_of(app.clone(), "POST", "/set?key=a&value=1").await,
            StatusCode::CREATED
        );
        assert_eq!(
            status_of(app, "PUT", "/set?key=b&value=2").await,
            StatusCode::CREATED
        );
    }

    #[tokio::test]
    async fn test_get_not_found() {
        assert_eq!(
            status_of(create_test_app(), "GET", "/get?key=nonexistent").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_bad_request() {
        let app = create_test_app();
        assert_eq!(status_of(app.clone(), "GET", "/get").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of(app.clone(), "DELETE", "/delete").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of(app, "POST", "/set?key=a").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_method() {
        assert_eq!(
            status_of(create_test_app(), "POST", "/get?key=a").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
