//! API Handlers
//!
//! HTTP request handlers translating query parameters into cache engine calls.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{parse_ttl, GetResponse, HealthResponse, KeyParams, SetParams, SetResponse};

/// Application state shared across all handlers.
///
/// Holds a handle to the cache engine; the engine owns its own lock.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache engine
    pub cache: Cache<String>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: Cache<String>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Cache::from_config(config))
    }
}

/// Handler for `POST|PUT /set?key=..&value=..&ttl=..`
///
/// Stores a key-value pair. A missing or unparseable TTL falls back to the
/// cache's default TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Query(params): Query<SetParams>,
) -> Result<(StatusCode, Json<SetResponse>)> {
    if let Some(error_msg) = params.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = match params.ttl.as_deref() {
        None | Some("") => None,
        Some(raw) => {
            let parsed = parse_ttl(raw);
            if parsed.is_none() {
                warn!(key = %params.key, ttl = raw, "invalid ttl, using default");
            }
            parsed
        }
    };

    state.cache.set(params.key.clone(), params.value, ttl)?;
    debug!(key = %params.key, ?ttl, "set");

    Ok((StatusCode::CREATED, Json(SetResponse::new(params.key))))
}

/// Handler for `GET /get?key=..`
///
/// Retrieves a live value from the cache.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(params): Query<KeyParams>,
) -> Result<Json<GetResponse>> {
    if let Some(error_msg) = params.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let value = state.cache.get(&params.key)?;
    Ok(Json(GetResponse::new(params.key, value)))
}

/// Handler for `DELETE /delete?key=..`
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(params): Query<KeyParams>,
) -> Result<StatusCode> {
    if let Some(error_msg) = params.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.delete(&params.key)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for `GET /health`
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};

    fn test_state() -> AppState {
        AppState::new(Cache::new(100, Duration::from_secs(300)))
    }

    fn set_params(key: &str, value: &str, ttl: Option<&str>) -> Query<SetParams> {
        Query(SetParams {
            key: key.to_string(),
            value: value.to_string(),
            ttl: ttl.map(str::to_string),
        })
    }

    fn key_params(key: &str) -> Query<KeyParams> {
        Query(KeyParams {
            key: key.to_string(),
        })
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state();

        let (status, _) =
            assert_ok!(set_handler(State(state.clone()), set_params("test_key", "test_value", None)).await);
        assert_eq!(status, StatusCode::CREATED);

        let response = assert_ok!(get_handler(State(state), key_params("test_key")).await);
        assert_eq!(response.value, "test_value");
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state();

        let err = assert_err!(get_handler(State(state), key_params("nonexistent")).await);
        assert!(matches!(err, CacheError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = test_state();

        assert_ok!(set_handler(State(state.clone()), set_params("to_delete", "value", None)).await);

        let status = assert_ok!(delete_handler(State(state.clone()), key_params("to_delete")).await);
        assert_eq!(status, StatusCode::NO_CONTENT);

        assert_err!(get_handler(State(state.clone()), key_params("to_delete")).await);
        assert_err!(delete_handler(State(state), key_params("to_delete")).await);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_set_invalid_request() {
        let state = test_state();

        let err = assert_err!(set_handler(State(state.clone()), set_params("", "value", None)).await);
        assert!(matches!(err, CacheError::InvalidRequest(_)));

        let err = assert_err!(set_handler(State(state), set_params("key", "", None)).await);
        assert!(matches!(err, CacheError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_get_empty_key_rejected() {
        let err = assert_err!(get_handler(State(test_state()), key_params("")).await);
        assert!(matches!(err, CacheError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_set_with_ttl_expires() {
        let state = test_state();

        assert_ok!(set_handler(State(state.clone()), set_params("short", "v", Some("20ms"))).await);
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_err!(get_handler(State(state), key_params("short")).await);
    }

    #[tokio::test]
    async fn test_set_invalid_ttl_uses_default() {
        let state = test_state();

        assert_ok!(set_handler(State(state.clone()), set_params("key", "v", Some("soon"))).await);
        tokio::time::sleep(Duration::from_millis(20)).await;

        let response = assert_ok!(get_handler(State(state), key_params("key")).await);
        assert_eq!(response.value, "v");
    }
}
