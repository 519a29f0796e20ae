//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

// == Cache Entry ==
/// A stored value together with its insertion time and lifespan.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value, never inspected by the cache
    pub value: V,
    /// Insertion timestamp (clock milliseconds)
    pub stored_at: u64,
    /// Lifespan in milliseconds
    pub ttl_ms: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stored at `stored_at` living for `ttl_ms`.
    pub fn new(value: V, stored_at: u64, ttl_ms: u64) -> Self {
        Self {
            value,
            stored_at,
            ttl_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at time `now`.
    ///
    /// Boundary condition: an entry is still live at exactly
    /// `stored_at + ttl_ms` and expires strictly after it.
    pub fn is_expired(&self, now: u64) -> bool {
        now.saturating_sub(self.stored_at) > self.ttl_ms
    }
}
