//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Cache Entry ==
/// A single cached response payload with expiry metadata.
///
/// The payload is opaque to the cache; its serialized length is measured once
/// at insertion for size accounting and kept alongside the value.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Value,
    /// Last-touch timestamp (Unix milliseconds), refreshed on every live read
    pub stored_at: u64,
    /// Time-to-live in milliseconds, measured from `stored_at`
    pub ttl_ms: u64,
    /// Estimated size of this entry (key + serialized value + metadata)
    pub size_bytes: usize,
}

/// Fixed per-entry bookkeeping overhead used in size estimation
/// (timestamp + ttl + map slot).
pub const ENTRY_OVERHEAD_BYTES: usize = 24;

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry, estimating its size from the key and the
    /// value's JSON serialization (two bytes per character, modelling a
    /// wide-character text encoding).
    pub fn new(key: &str, value: Value, ttl_ms: u64) -> Self {
        let serialized_len = value.to_string().len();
        let size_bytes = 2 * key.len() + 2 * serialized_len + ENTRY_OVERHEAD_BYTES;

        Self {
            value,
            stored_at: current_timestamp_ms(),
            ttl_ms,
            size_bytes,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry's age strictly exceeds its TTL.
    ///
    /// An entry whose age equals its TTL exactly is still live; expiry
    /// requires `now - stored_at > ttl`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.stored_at) > self.ttl_ms
    }

    // == Touch ==
    /// Refreshes `stored_at` to the given time, extending the expiry window
    /// and marking the entry as recently used.
    pub fn touch(&mut self, now_ms: u64) {
        self.stored_at = now_ms;
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
