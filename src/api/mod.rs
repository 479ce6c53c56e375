//! API Module
//!
//! HTTP handlers and routing for the cache server.
//!
//! # Endpoints
//! - `POST|PUT /set?key=..&value=..&ttl=..` - Store a key-value pair
//! - `GET /get?key=..` - Retrieve a value by key
//! - `DELETE /delete?key=..` - Delete a key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
