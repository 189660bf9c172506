//! Shared Cache Handle
//!
//! Thread-safe wrapper around [`CacheStore`]. A single mutex guards the whole
//! store; no operation performs I/O while holding it.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

/// Cheap-to-clone handle to a shared TTL cache.
///
/// Every clone refers to the same underlying store, so a handle can be given
/// to several requesters or to the background sweeper.
#[derive(Debug)]
pub struct Cache<V> {
    inner: Arc<Mutex<CacheStore<V>>>,
}

impl<V> Clone for Cache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> Cache<V> {
    /// Creates an empty cache with an optional store-wide default TTL.
    pub fn new(default_ttl: Option<Duration>) -> Self {
        Self::from_store(CacheStore::new(default_ttl))
    }

    pub fn from_store(store: CacheStore<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Returns the live value for `key`, never an expired one.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lock().get(key)
    }

    /// Inserts or overwrites `key`. See [`CacheStore::put`] for TTL resolution.
    pub fn put(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) -> Result<()> {
        self.lock().put(key.into(), value, ttl)
    }

    /// Resets the age of a live entry. Returns `false` if there was none.
    pub fn touch(&self, key: &str) -> bool {
        self.lock().touch(key)
    }

    pub fn remove(&self, key: &str) -> bool {
        self.lock().remove(key)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn sweep(&self) -> usize {
        self.lock().cleanup_expired()
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    pub fn default_ttl(&self) -> Option<Duration> {
        self.lock().default_ttl()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every mutation is a single map operation; a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<'_, CacheStore<V>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
