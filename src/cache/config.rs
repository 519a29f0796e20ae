//! Cache Configuration Module
//!
//! The two tunables of a cache store and their partial update.

use serde::{Deserialize, Serialize};

/// Default lifespan of an entry: 5 minutes.
pub const DEFAULT_TTL_MS: u64 = 300_000;

/// Default entry cap.
pub const DEFAULT_MAX_ENTRIES: usize = 100;

// == Cache Config ==
/// Tunables of a [`CacheStore`](super::CacheStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL applied when `set` is called without one
    pub default_ttl_ms: u64,
    /// Hard cap on the number of entries; 0 disables storage
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: DEFAULT_TTL_MS,
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl CacheConfig {
    // == Apply Update ==
    /// Merges the fields present in `update` into this configuration.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(ttl) = update.default_ttl_ms {
            self.default_ttl_ms = ttl;
        }
        if let Some(max) = update.max_entries {
            self.max_entries = max;
        }
    }
}

// == Config Update ==
/// Partial configuration; absent fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigUpdate {
    #[serde(default)]
    pub default_ttl_ms: Option<u64>,
    #[serde(default)]
    pub max_entries: Option<usize>,
}
