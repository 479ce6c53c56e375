//! Request and Response models for the cache server API
//!
//! Query-parameter DTOs, TTL parsing, and serialized response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{parse_ttl, KeyParams, SetParams};
pub use responses::{ErrorResponse, GetResponse, HealthResponse, SetResponse};
