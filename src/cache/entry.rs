//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with its value and freshness metadata.
///
/// Timestamps come from `tokio::time::Instant`, which follows the real clock
/// outside of a paused test runtime.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the entry was inserted or last revalidated
    pub inserted_at: Instant,
    /// How long the entry stays live after `inserted_at`
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once its age strictly exceeds its TTL; at exactly
    /// `inserted_at + ttl` it is still live.
    pub fn is_expired(&self) -> bool {
        self.age() > self.ttl
    }

    // == Age ==
    /// Time elapsed since insertion or the last touch.
    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.inserted_at)
    }

    // == Touch ==
    /// Resets the insertion time, leaving value and TTL unchanged.
    pub fn touch(&mut self) {
        self.inserted_at = Instant::now();
    }
}
