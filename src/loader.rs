//! Typed Loading Module
//!
//! Memoizes expensive fetches (dashboard API calls) in a shared JSON cache
//! while keeping each call site statically typed.

use std::fmt::Display;
use std::future::Future;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::{Clock, SharedCache};
use crate::error::{CacheError, Result};

/// Builds a `<domain>_<qualifier>` cache key.
pub fn cache_key(domain: &str, qualifier: impl Display) -> String {
    format!("{}_{}", domain, qualifier)
}

// == Get Typed ==
/// Reads the entry under `key` as a `T`.
///
/// An entry whose JSON does not match `T` is deleted and reported as absent.
pub async fn get_typed<T, C>(cache: &SharedCache<serde_json::Value, C>, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    C: Clock,
{
    let mut store = cache.write().await;
    let value = store.get(key)?.clone();

    match serde_json::from_value(value) {
        Ok(typed) => Some(typed),
        Err(err) => {
            warn!(key = %key, error = %err, "Cached value has unexpected shape, dropping it");
            store.delete(key);
            None
        }
    }
}

// == Set Typed ==
/// Stores `value` as JSON under `key`.
pub async fn set_typed<T, C>(
    cache: &SharedCache<serde_json::Value, C>,
    key: &str,
    value: &T,
    ttl_ms: Option<u64>,
) -> Result<()>
where
    T: Serialize,
    C: Clock,
{
    let json = serde_json::to_value(value)?;
    cache.write().await.set(key, json, ttl_ms);
    Ok(())
}

// == Get Or Load ==
/// Returns the cached `T` under `key`, or runs `load` and caches its result.
///
/// The cache lock is not held while `load` runs, so concurrent misses on the
/// same key may each call their loader. A failed load caches nothing.
pub async fn get_or_load<T, C, F, Fut>(
    cache: &SharedCache<serde_json::Value, C>,
    key: &str,
    ttl_ms: Option<u64>,
    load: F,
) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    C: Clock,
    F: FnOnce() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    if let Some(hit) = get_typed(cache, key).await {
        debug!(key = %key, "Cache hit");
        return Ok(hit);
    }

    debug!(key = %key, "Cache miss, loading");
    let value = load()
        .await
        .map_err(|err| CacheError::Upstream(format!("{:#}", err)))?;

    set_typed(cache, key, &value, ttl_ms).await?;
    Ok(value)
}
