//! Fleet Cache - In-memory response cache for the fleet dashboard
//!
//! Memoizes dashboard API responses with per-entry TTL expiration, a bounded
//! entry count with FIFO eviction, and a periodic expiry sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheConfig, CacheStore, SharedCache};
pub use config::Config;
pub use error::{CacheError, Result};
pub use tasks::SweepTask;
