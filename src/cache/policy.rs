//! Eviction Policy Module
//!
//! Selects the entry to evict when an insert would exceed capacity.

use std::collections::HashMap;

use crate::cache::CacheEntry;

// == Eviction Policy ==
/// Controls which entries are candidates for capacity eviction.
///
/// The victim is always the candidate with the earliest expiry; ties go to
/// the entry inserted first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Every entry is a candidate, permanent ones included
    #[default]
    IncludePermanent,
    /// Permanent entries are never evicted
    ExemptPermanent,
}

impl EvictionPolicy {
    /// Builds a policy from the `EVICT_PERMANENT` style flag.
    pub fn from_evict_permanent(evict_permanent: bool) -> Self {
        if evict_permanent {
            Self::IncludePermanent
        } else {
            Self::ExemptPermanent
        }
    }

    // == Is Candidate ==
    fn is_candidate<V>(&self, entry: &CacheEntry<V>) -> bool {
        match self {
            Self::IncludePermanent => true,
            Self::ExemptPermanent => !entry.permanent,
        }
    }

    // == Select Victim ==
    /// Returns the key of the entry to evict, or None if no entry qualifies.
    pub fn select_victim<V>(&self, entries: &HashMap<String, CacheEntry<V>>) -> Option<String> {
        entries
            .iter()
            .filter(|(_, entry)| self.is_candidate(entry))
            .min_by_key(|(_, entry)| (entry.expires_at, entry.seq))
            .map(|(key, _)| key.clone())
    }
}
