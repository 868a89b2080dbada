//! Cache Statistics Module
//!
//! Snapshot of the store's entry count and estimated memory footprint.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of the store's size accounting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Current live entry count (may include not-yet-swept expired entries)
    pub size: usize,
    /// Sum of per-entry size estimates (key + serialized value + overhead)
    pub estimated_memory_bytes: usize,
}
