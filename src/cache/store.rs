//! Cache Store Module
//!
//! In-memory response cache with per-entry TTL, approximate size accounting
//! and least-recently-used eviction on overflow.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::{current_timestamp_ms, CacheEntry, CacheStats};

// == Memory Cache ==
/// Bounded key/value store for tool responses.
///
/// The store never rejects an insert: when an insertion would push the
/// estimated total size over `max_bytes`, exactly one eviction of the
/// least-recently-touched entry is attempted and the insert proceeds
/// regardless, so the total may temporarily exceed the bound by one entry.
///
/// Not internally synchronized; callers serialize access externally
/// (see [`crate::cache::SharedCache`]).
#[derive(Debug)]
pub struct MemoryCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Running sum of per-entry size estimates
    estimated_bytes: usize,
    /// Estimated-size bound in bytes
    max_bytes: usize,
    /// TTL applied when the caller does not supply one
    default_ttl_ms: u64,
}

impl MemoryCache {
    // == Constructor ==
    /// Creates a new store with the given size bound and default TTL.
    pub fn new(max_bytes: usize, default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            estimated_bytes: 0,
            max_bytes,
            default_ttl_ms: default_ttl.as_millis() as u64,
        }
    }

    // == Set ==
    /// Inserts or fully replaces the entry under `key`.
    ///
    /// Uses `ttl` if given, else the store default. If the estimated total
    /// after insertion would exceed the bound, the entry with the smallest
    /// touch timestamp is evicted first (a single bounded-effort eviction).
    pub fn set(&mut self, key: String, value: Value, ttl: Option<Duration>) {
        let ttl_ms = ttl
            .map(|d| d.as_millis() as u64)
            .unwrap_or(self.default_ttl_ms);
        let entry = CacheEntry::new(&key, value, ttl_ms);
        let entry_size = entry.size_bytes;

        if self.estimated_bytes + entry_size > self.max_bytes {
            self.evict_least_recently_used();
        }

        debug!("cache set: {key} (ttl: {ttl_ms}ms)");
        if let Some(prev) = self.entries.insert(key, entry) {
            self.estimated_bytes -= prev.size_bytes;
        }
        self.estimated_bytes += entry_size;
    }

    // == Get ==
    /// Returns a clone of the stored payload, or `None` if the key is
    /// unknown or its entry has outlived its TTL (in which case the entry
    /// is removed as a side effect).
    ///
    /// A live hit refreshes the entry's touch timestamp, extending both its
    /// expiry window and its standing against LRU eviction.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now = current_timestamp_ms();

        let hit = match self.entries.get_mut(key) {
            None => {
                debug!("cache miss: {key}");
                return None;
            }
            Some(entry) => {
                if entry.is_expired(now) {
                    None
                } else {
                    entry.touch(now);
                    Some(entry.value.clone())
                }
            }
        };

        match hit {
            Some(value) => {
                debug!("cache hit: {key}");
                Some(value)
            }
            None => {
                self.remove_entry(key);
                debug!("cache expired: {key}");
                None
            }
        }
    }

    // == Has ==
    /// Same expiry check and removal side effect as [`MemoryCache::get`],
    /// but does not refresh the touch timestamp and does not return the value.
    pub fn has(&mut self, key: &str) -> bool {
        let now = current_timestamp_ms();

        let expired = match self.entries.get(key) {
            None => return false,
            Some(entry) => entry.is_expired(now),
        };

        if expired {
            self.remove_entry(key);
            debug!("cache expired: {key}");
            return false;
        }
        true
    }

    // == Delete ==
    /// Removes the entry if present; returns whether anything was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let deleted = self.remove_entry(key);
        if deleted {
            debug!("cache deleted: {key}");
        }
        deleted
    }

    // == Clear ==
    /// Drops all entries unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.estimated_bytes = 0;
    }

    // == Length ==
    /// Current live entry count (may include not-yet-swept expired entries).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Snapshot of entry count and estimated memory footprint.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.entries.len(),
            estimated_memory_bytes: self.estimated_bytes,
        }
    }

    // == Sweep Expired ==
    /// Removes all entries whose age exceeds their TTL.
    ///
    /// Returns the number of entries removed. Best-effort cleanup for
    /// entries that are written once and never read again; readers are
    /// already protected by the lazy checks in `get`/`has`.
    pub fn sweep_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            self.remove_entry(&key);
        }
        count
    }

    // == Internal ==
    fn remove_entry(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => {
                self.estimated_bytes -= entry.size_bytes;
                true
            }
            None => false,
        }
    }

    /// Evicts the entry with the smallest touch timestamp, if any.
    /// O(n) scan; runs only on overflowing inserts, never on reads.
    fn evict_least_recently_used(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.stored_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.remove_entry(&key);
            debug!("cache LRU eviction: {key}");
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ENTRY_OVERHEAD_BYTES;
    use serde_json::json;
    use std::thread::sleep;

    fn entry_size(key: &str, value: &Value) -> usize {
        2 * key.len() + 2 * value.to_string().len() + ENTRY_OVERHEAD_BYTES
    }

    fn unbounded() -> MemoryCache {
        MemoryCache::new(usize::MAX, Duration::from_secs(300))
    }

    #[test]
    fn test_store_new() {
        let store = unbounded();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.stats().estimated_memory_bytes, 0);
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let mut store = unbounded();
        let value = json!({"package_name": "lodash", "exists": true});

        store.set("pkg_info:lodash:latest".into(), value.clone(), None);

        assert_eq!(store.get("pkg_info:lodash:latest"), Some(value));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_unknown_key() {
        let mut store = unbounded();
        assert_eq!(store.get("missing"), None);
        assert!(!store.has("missing"));
    }

    #[test]
    fn test_overwrite_replaces_entry() {
        let mut store = unbounded();

        store.set("k".into(), json!("first"), None);
        store.set("k".into(), json!("second and longer"), None);

        assert_eq!(store.get("k"), Some(json!("second and longer")));
        assert_eq!(store.len(), 1);
        // Size accounting reflects only the replacement value.
        assert_eq!(
            store.stats().estimated_memory_bytes,
            entry_size("k", &json!("second and longer"))
        );
    }

    #[test]
    fn test_delete() {
        let mut store = unbounded();
        store.set("k".into(), json!("v"), None);

        assert!(store.delete("k"));
        assert!(!store.has("k"));
        assert!(!store.delete("k"));
        assert_eq!(store.stats().estimated_memory_bytes, 0);
    }

    #[test]
    fn test_clear() {
        let mut store = unbounded();
        store.set("a".into(), json!(1), None);
        store.set("b".into(), json!(2), None);

        store.clear();

        assert_eq!(store.len(), 0);
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), None);
        assert_eq!(store.stats().estimated_memory_bytes, 0);
    }

    #[test]
    fn test_ttl_expiry_removes_entry_on_get() {
        let mut store = unbounded();
        store.set("short".into(), json!("v"), Some(Duration::from_millis(100)));
        store.set("long".into(), json!("v"), Some(Duration::from_secs(60)));
        assert_eq!(store.len(), 2);

        sleep(Duration::from_millis(250));

        assert_eq!(store.get("short"), None);
        // Lazy expiry removed the entry as a side effect.
        assert_eq!(store.len(), 1);
        assert!(store.has("long"));
    }

    #[test]
    fn test_has_removes_expired_entry() {
        let mut store = unbounded();
        store.set("k".into(), json!("v"), Some(Duration::from_millis(100)));

        sleep(Duration::from_millis(250));

        assert!(!store.has("k"));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_get_refreshes_expiry_window() {
        let mut store = unbounded();
        store.set("k".into(), json!("v"), Some(Duration::from_millis(400)));

        sleep(Duration::from_millis(250));
        assert!(store.get("k").is_some());

        // 500ms since insertion but only 250ms since the last read.
        sleep(Duration::from_millis(250));
        assert!(store.get("k").is_some());

        sleep(Duration::from_millis(600));
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_has_does_not_refresh_expiry_window() {
        let mut store = unbounded();
        store.set("k".into(), json!("v"), Some(Duration::from_millis(300)));

        sleep(Duration::from_millis(200));
        assert!(store.has("k"));

        sleep(Duration::from_millis(200));
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_overflow_evicts_single_oldest_entry() {
        let size_a = entry_size("a", &json!("x"));
        // Room for exactly one such entry.
        let mut store = MemoryCache::new(size_a + 1, Duration::from_secs(300));

        store.set("a".into(), json!("x"), None);
        sleep(Duration::from_millis(10));
        store.set("b".into(), json!("x"), None);

        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), Some(json!("x")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_eviction_targets_least_recently_touched() {
        let one = entry_size("a", &json!("x"));
        let mut store = MemoryCache::new(2 * one + 1, Duration::from_secs(300));

        store.set("a".into(), json!("x"), None);
        sleep(Duration::from_millis(10));
        store.set("b".into(), json!("x"), None);
        sleep(Duration::from_millis(10));

        // Touch "a" so "b" becomes the oldest entry.
        assert!(store.get("a").is_some());
        sleep(Duration::from_millis(10));

        store.set("c".into(), json!("x"), None);

        assert!(store.get("a").is_some());
        assert_eq!(store.get("b"), None);
        assert!(store.get("c").is_some());
    }

    #[test]
    fn test_oversized_insert_proceeds_after_one_eviction() {
        let mut store = MemoryCache::new(16, Duration::from_secs(300));

        // Larger than the whole bound; nothing to evict, insert proceeds.
        store.set("big".into(), json!("a long oversized payload"), None);
        assert_eq!(store.len(), 1);
        assert!(store.stats().estimated_memory_bytes > 16);

        // The next insert performs its one eviction and also proceeds.
        store.set("next".into(), json!("also oversized content"), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("big"), None);
        assert!(store.get("next").is_some());
    }

    #[test]
    fn test_stats_estimate_matches_formula() {
        let mut store = unbounded();
        let a = json!({"name": "lodash"});
        let b = json!(["react", "vue", "svelte"]);

        store.set("ka".into(), a.clone(), None);
        store.set("kb".into(), b.clone(), None);

        assert_eq!(
            store.stats().estimated_memory_bytes,
            entry_size("ka", &a) + entry_size("kb", &b)
        );

        store.delete("ka");
        assert_eq!(store.stats().estimated_memory_bytes, entry_size("kb", &b));
    }

    #[test]
    fn test_sweep_expired() {
        let mut store = unbounded();
        store.set("gone".into(), json!(1), Some(Duration::from_millis(100)));
        store.set("kept".into(), json!(2), Some(Duration::from_secs(60)));

        sleep(Duration::from_millis(250));

        assert_eq!(store.sweep_expired(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.has("kept"));
    }
}
