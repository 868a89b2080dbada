//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task loops forever, sleeping for the given interval between sweeps
/// and taking the store's write lock only for the duration of each sweep.
/// Readers never observe expired entries regardless (lazy checks in
/// `get`/`has`); the sweep bounds memory growth from entries that are
/// written once and never read again.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle used to abort the task when the cache is destroyed.
pub fn spawn_sweep_task(
    store: Arc<RwLock<MemoryCache>>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting expiry sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut store = store.write().await;
                store.sweep_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
