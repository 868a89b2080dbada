//! Shared Cache Wrapper
//!
//! Owns the store behind a lock together with its background sweep task, so
//! the cache has an explicit lifecycle instead of living as a process-wide
//! singleton: constructed once, injected where needed, destroyed exactly once
//! on shutdown.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::info;

use crate::cache::{CacheStats, MemoryCache};
use crate::tasks::spawn_sweep_task;

// == Shared Cache ==
/// Thread-safe handle to the response cache.
///
/// All store mutations (inserts, lazy expiry removal, eviction) run under
/// the write lock, so concurrent tool invocations cannot corrupt the map or
/// its size accounting. The sweep task is started at construction and
/// stopped by [`SharedCache::destroy`]; repeated destroys are safe no-ops.
pub struct SharedCache {
    store: Arc<RwLock<MemoryCache>>,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl SharedCache {
    // == Constructor ==
    /// Creates the store and starts its background expiry sweep.
    pub fn start(max_bytes: usize, default_ttl: Duration, sweep_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(MemoryCache::new(max_bytes, default_ttl)));
        let sweeper = spawn_sweep_task(store.clone(), sweep_interval);

        Self {
            store,
            sweeper: Mutex::new(Some(sweeper)),
        }
    }

    // == Read/Write Operations ==
    /// Looks up a cached payload; a live hit refreshes its touch timestamp.
    pub async fn get(&self, key: &str) -> Option<Value> {
        // Write lock: a hit touches the entry and an expired entry is removed.
        self.store.write().await.get(key)
    }

    /// Inserts or replaces a payload under `key`.
    pub async fn set(&self, key: String, value: Value, ttl: Option<Duration>) {
        self.store.write().await.set(key, value, ttl);
    }

    /// Whether a live entry exists under `key` (without touching it).
    pub async fn has(&self, key: &str) -> bool {
        self.store.write().await.has(key)
    }

    /// Removes the entry if present; returns whether anything was removed.
    pub async fn delete(&self, key: &str) -> bool {
        self.store.write().await.delete(key)
    }

    /// Drops all entries.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }

    /// Current live entry count.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Snapshot of entry count and estimated memory footprint.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Destroy ==
    /// Stops the sweep task and drops all entries.
    ///
    /// Safe to call more than once; only the first call aborts the sweeper.
    pub async fn destroy(&self) {
        if let Some(handle) = self.sweeper.lock().await.take() {
            handle.abort();
            info!("Cache sweep task stopped");
        }
        self.store.write().await.clear();
        info!("Cache destroyed");
    }
}
