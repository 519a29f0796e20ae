//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and FIFO eviction.

mod clock;
mod config;
mod entry;
mod order;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CacheConfig, ConfigUpdate, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_MS};
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::{CacheCounters, CacheStats};
pub use store::CacheStore;

/// A cache store shared between the sweep task and its callers.
pub type SharedCache<V = serde_json::Value, C = SystemClock> = Arc<RwLock<CacheStore<V, C>>>;

// == Public Constants ==
/// Maximum allowed key length in bytes on the HTTP surface
pub const MAX_KEY_LENGTH: usize = 256;

/// Wraps a store for sharing.
pub fn shared<V, C>(store: CacheStore<V, C>) -> SharedCache<V, C> {
    Arc::new(RwLock::new(store))
}
