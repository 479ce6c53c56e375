//! Cache Module
//!
//! In-memory caching with lazy TTL expiry and earliest-expiry eviction.

mod engine;
mod entry;
mod policy;
mod store;


// Re-export public types
pub use engine::Cache;
pub use entry::CacheEntry;
pub use policy::EvictionPolicy;
pub use store::CacheStore;
