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
/// Unified error type for the cache engine and its HTTP adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key absent, or present but expired (on read)
    #[error("key {0:?} not found")]
    NotFound(String),

    /// Invalid request data, rejected before reaching the engine
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Nothing could be evicted to make room
    #[error("cache full: {0}")]
    CacheFull(String),
}

impl CacheError {
    /// HTTP status the adapter reports for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::CacheFull(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;
