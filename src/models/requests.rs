//! Request DTOs for the cache admin API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::MAX_KEY_LENGTH;

/// Key taken by the `/cache/sweep` route, so it cannot be read or deleted.
const RESERVED_KEY: &str = "sweep";

/// Request body for the SET operation (PUT /cache)
///
/// # Fields
/// - `key`: The cache key, conventionally `<domain>_<qualifier>`
/// - `value`: Any JSON document to store
/// - `ttl_ms`: Optional TTL in milliseconds (uses default if absent or negative)
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    pub value: Value,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<i64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }

    /// TTL handed to the cache; negative values fall back to the default.
    pub fn resolved_ttl(&self) -> Option<u64> {
        self.ttl_ms.and_then(|ttl| u64::try_from(ttl).ok())
    }
}

/// Checks a key received on the HTTP surface.
pub fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    if key == RESERVED_KEY {
        return Some(format!("Key '{}' is reserved", RESERVED_KEY));
    }
    None
}
