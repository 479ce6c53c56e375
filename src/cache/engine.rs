//! Cache Engine Module
//!
//! Thread-safe handle around [`CacheStore`]. Every operation runs end-to-end
//! under one engine-wide lock, so eviction and the insert that triggered it
//! are a single critical section.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::cache::{CacheStore, EvictionPolicy};
use crate::config::Config;
use crate::error::Result;

// == Cache ==
/// Shared cache engine.
///
/// Cloning is cheap and yields another handle to the same store.
#[derive(Debug)]
pub struct Cache<V> {
    store: Arc<Mutex<CacheStore<V>>>,
    capacity: usize,
    default_ttl: Duration,
}

impl<V> Clone for Cache<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            capacity: self.capacity,
            default_ttl: self.default_ttl,
        }
    }
}

impl<V: Clone> Cache<V> {
    /// Creates a cache with the default eviction policy.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, 0 for unbounded
    /// * `default_ttl` - TTL for entries stored without an explicit one
    pub fn new(capacity: usize, default_ttl: Duration) -> Self {
        Self::with_policy(capacity, default_ttl, EvictionPolicy::default())
    }

    /// Creates a cache with an explicit eviction policy.
    pub fn with_policy(capacity: usize, default_ttl: Duration, policy: EvictionPolicy) -> Self {
        Self {
            store: Arc::new(Mutex::new(CacheStore::new(capacity, default_ttl, policy))),
            capacity,
            default_ttl,
        }
    }

    /// Creates a cache from server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_policy(
            config.max_entries,
            Duration::from_secs(config.default_ttl),
            EvictionPolicy::from_evict_permanent(config.evict_permanent),
        )
    }

    // == Operations ==
    /// Stores `value` under `key`, expiring after `ttl` or the default TTL.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) -> Result<()> {
        let key = key.into();
        let mut store = self.store.lock();
        store.set_at(key, value, ttl, Instant::now())
    }

    /// Stores `value` under `key` exempt from expiry.
    pub fn set_permanent(&self, key: impl Into<String>, value: V) -> Result<()> {
        let key = key.into();
        let mut store = self.store.lock();
        store.set_permanent_at(key, value, Instant::now())
    }

    /// Returns a copy of the live value stored under `key`.
    pub fn get(&self, key: &str) -> Result<V> {
        let mut store = self.store.lock();
        store.get_at(key, Instant::now())
    }

    /// Returns true if `get` would currently succeed.
    pub fn contains(&self, key: &str) -> bool {
        let mut store = self.store.lock();
        store.contains_at(key, Instant::now())
    }

    /// Removes `key`, whether expired or live.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.store.lock().delete(key)
    }

    /// Removes every expired entry, returning how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        let mut store = self.store.lock();
        store.cleanup_expired_at(Instant::now())
    }

    // == Accessors ==
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
