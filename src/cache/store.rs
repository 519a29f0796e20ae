//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with insertion-order tracking
//! and TTL expiration.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{
    CacheConfig, CacheCounters, CacheEntry, CacheStats, Clock, ConfigUpdate, InsertionOrder,
    SystemClock,
};

// == Cache Store ==
/// In-memory key/value store with per-entry TTL and a bounded entry count.
///
/// Expired entries are removed when a read discovers them or when
/// [`clean_expired`](Self::clean_expired) runs. When full, inserting a new
/// key evicts the longest-resident key regardless of its remaining TTL.
#[derive(Debug)]
pub struct CacheStore<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Insertion order of present keys
    order: InsertionOrder,
    /// Lifetime counters
    counters: CacheCounters,
    config: CacheConfig,
    clock: C,
}

impl<V> CacheStore<V, SystemClock> {
    // == Constructor ==
    /// Creates a new CacheStore timed by the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<V> Default for CacheStore<V, SystemClock> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl<V, C: Clock> CacheStore<V, C> {
    /// Creates a new CacheStore timed by `clock`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            counters: CacheCounters::default(),
            config,
            clock,
        }
    }

    // == Set ==
    /// Stores a value under `key` for `ttl_ms` (or the default TTL).
    ///
    /// Overwriting a key resets its TTL and makes it the most recent
    /// insertion. Inserting a new key into a full cache first evicts the
    /// oldest insertion.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        let key = key.into();
        let max_entries = self.config.max_entries;

        if max_entries == 0 {
            // A zero cap holds nothing: drop any previous value, then drain
            self.delete(&key);
            self.evict_until(0);
            debug!(key = %key, "Caching disabled, dropping entry");
            return;
        }

        if !self.entries.contains_key(&key) {
            self.evict_until(max_entries - 1);
        }

        let ttl_ms = ttl_ms.unwrap_or(self.config.default_ttl_ms);
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl_ms);

        self.order.push(&key);
        self.entries.insert(key, entry);
    }

    // == Get ==
    /// Retrieves the live value stored under `key`.
    ///
    /// Expired entries are removed and reported as absent. Reads never extend
    /// an entry's lifespan.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        if !self.check_live(key) {
            self.counters.record_miss();
            return None;
        }

        self.counters.record_hit();
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Has ==
    /// Returns whether a live entry exists under `key`.
    ///
    /// Applies the same lazy expiry as [`get`](Self::get).
    pub fn has(&mut self, key: &str) -> bool {
        self.check_live(key)
    }

    // == Delete ==
    /// Removes an entry by key, returning whether one was present.
    pub fn delete(&mut self, key: &str) -> bool {
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            true
        } else {
            false
        }
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    // == Clean Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn clean_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.order.remove(key);
        }

        self.counters.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Stats ==
    /// Returns a snapshot of the cache contents and counters.
    ///
    /// No expiry check is made, so entries that expired since the last read
    /// or sweep are still included.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            max_size: self.config.max_entries,
            keys: self.order.keys(),
            counters: self.counters,
        }
    }

    // == Set Config ==
    /// Merges `update` into the configuration.
    ///
    /// Stored entries keep their TTL. Lowering `max_entries` below the
    /// current size evicts nothing until the next insertion of a new key.
    pub fn set_config(&mut self, update: ConfigUpdate) {
        self.config.apply(update);
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes `key` if it has expired. Returns whether a live entry remains.
    fn check_live(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => return false,
        };

        if expired {
            self.entries.remove(key);
            self.order.remove(key);
            self.counters.record_expirations(1);
            debug!(key = %key, "Expired entry removed on read");
            return false;
        }

        true
    }

    /// Evicts oldest insertions until at most `limit` entries remain.
    fn evict_until(&mut self, limit: usize) {
        while self.entries.len() > limit {
            let Some(evicted) = self.order.pop_oldest() else {
                break;
            };
            self.entries.remove(&evicted);
            self.counters.record_eviction();
            debug!(key = %evicted, "Evicted oldest entry");
        }
    }
}
