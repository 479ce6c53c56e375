//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with expiry and permanence.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, never inspected by the engine
    pub value: V,
    /// Absolute point in time after which the entry is logically absent
    pub expires_at: Instant,
    /// Permanent entries are exempt from expiry
    pub permanent: bool,
    /// Insertion sequence, used to break eviction ties
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new non-permanent entry expiring `ttl` after `now`.
    pub fn new(value: V, now: Instant, ttl: Duration, seq: u64) -> Self {
        Self {
            value,
            expires_at: expiry_after(now, ttl),
            permanent: false,
            seq,
        }
    }

    /// Creates a permanent entry. The expiry is still recorded so the
    /// earliest-expiry scan has something to compare against.
    pub fn permanent(value: V, now: Instant, ttl: Duration, seq: u64) -> Self {
        Self {
            permanent: true,
            ..Self::new(value, now, ttl, seq)
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// An entry is expired only once its expiry lies strictly before `now`;
    /// at the exact expiry instant it is still live. Permanent entries never
    /// expire.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        !self.permanent && self.expires_at < now
    }
}

/// Adds `ttl` to `now`, saturating a century out when the sum overflows `Instant`.
fn expiry_after(now: Instant, ttl: Duration) -> Instant {
    now.checked_add(ttl)
        .unwrap_or_else(|| now + Duration::from_secs(60 * 60 * 24 * 365 * 100))
}
