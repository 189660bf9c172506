//! Cache Module
//!
//! Provides a thread-safe in-memory cache with independent per-entry TTLs.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;
