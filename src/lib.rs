//! ttl_cache - An in-memory key-value cache server
//!
//! Entries expire lazily after a TTL; a full cache evicts the entry with the
//! earliest expiry. The [`cache::Cache`] engine is usable on its own; the
//! `api` module exposes it over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{Cache, EvictionPolicy};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_cleanup_task;
