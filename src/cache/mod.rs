//! Cache Module
//!
//! Provides in-memory response caching with TTL expiration, approximate size
//! accounting, LRU-on-overflow eviction, and cache key derivation.

mod entry;
pub mod key;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, ENTRY_OVERHEAD_BYTES};
pub use shared::SharedCache;
pub use stats::CacheStats;
pub use store::MemoryCache;
