//! Cache Store Module
//!
//! Unsynchronized cache state: HashMap storage with lazy TTL expiry and
//! earliest-expiry eviction. Shared access goes through [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, EvictionPolicy};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Cache storage with capacity-bounded eviction and TTL support.
///
/// Time-dependent operations take the current instant explicitly.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Maximum number of entries allowed, 0 = unbounded
    capacity: usize,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
    /// Which entries may be evicted
    policy: EvictionPolicy,
    /// Next insertion sequence number
    next_seq: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, 0 for unbounded
    /// * `default_ttl` - TTL for entries stored without an explicit one
    /// * `policy` - Eviction candidate policy
    pub fn new(capacity: usize, default_ttl: Duration, policy: EvictionPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
            default_ttl,
            policy,
            next_seq: 0,
        }
    }

    // == Set ==
    /// Stores a key-value pair, expiring `ttl` (or the default TTL) after `now`.
    ///
    /// Overwriting an existing key replaces its value and expiry and clears
    /// permanence. Any set against a full cache evicts one entry first, even
    /// when the key is already resident.
    pub fn set_at(&mut self, key: String, value: V, ttl: Option<Duration>, now: Instant) -> Result<()> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        self.make_room()?;
        let entry = CacheEntry::new(value, now, ttl, self.bump_seq());
        self.entries.insert(key, entry);
        Ok(())
    }

    // == Set Permanent ==
    /// Stores a key-value pair that is exempt from expiry.
    pub fn set_permanent_at(&mut self, key: String, value: V, now: Instant) -> Result<()> {
        self.make_room()?;
        let entry = CacheEntry::permanent(value, now, self.default_ttl, self.bump_seq());
        self.entries.insert(key, entry);
        Ok(())
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// An entry found expired is removed and reported as not found.
    pub fn get_at(&mut self, key: &str, now: Instant) -> Result<V> {
        if !self.contains_at(key, now) {
            return Err(CacheError::NotFound(key.to_string()));
        }
        self.entries
            .get(key)
            .map(|entry| entry.value.clone())
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    // == Contains ==
    /// Returns true if `get_at` would succeed, applying the same lazy expiry.
    pub fn contains_at(&mut self, key: &str, now: Instant) -> bool {
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired_at(now),
            None => return false,
        };
        if expired {
            self.entries.remove(key);
            debug!(key, "removed expired entry on read");
        }
        !expired
    }

    // == Delete ==
    /// Removes an entry by key, expired or not.
    pub fn delete(&mut self, key: &str) -> Result<()> {
        match self.entries.remove(key) {
            Some(_) => Ok(()),
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    // == Evict ==
    /// Evicts one entry per the eviction policy, returning the evicted key.
    fn evict_one(&mut self) -> Option<String> {
        let victim = self.policy.select_victim(&self.entries)?;
        self.entries.remove(&victim);
        debug!(key = %victim, "evicted entry at capacity");
        Some(victim)
    }

    /// Evicts one entry when the store is at capacity, overwrites included.
    fn make_room(&mut self) -> Result<()> {
        if self.capacity == 0 || self.entries.len() < self.capacity {
            return Ok(());
        }
        match self.evict_one() {
            Some(_) => Ok(()),
            // The policy found nothing to evict; only possible when every
            // resident entry is permanent and exempt.
            None if !self.entries.is_empty() => Err(CacheError::CacheFull(format!(
                "all {} entries are permanent and exempt from eviction",
                self.entries.len()
            ))),
            None => Ok(()),
        }
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    // == Accessors ==
    /// Returns the current number of entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }
}
