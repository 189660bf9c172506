//! Cache Store Module
//!
//! Main cache engine: HashMap storage with per-entry TTL expiration.
//! Expired entries are swept synchronously on every `get` and `put`.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::{Error, Result};

// == Cache Store ==
/// Single-owner cache storage. Wrap it in [`crate::cache::Cache`] to share it.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Activity counters
    stats: CacheStats,
    /// TTL applied when `put` is called without one
    default_ttl: Option<Duration>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL used when `put` receives none; `None` makes a
    ///   per-call TTL mandatory
    pub fn new(default_ttl: Option<Duration>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
        }
    }

    // == Put ==
    /// Stores a value, overwriting any existing entry and resetting its age.
    ///
    /// Fails with [`Error::Configuration`] when no TTL can be resolved or the
    /// resolved TTL is zero; the store is left untouched in that case.
    pub fn put(&mut self, key: String, value: V, ttl: Option<Duration>) -> Result<()> {
        let effective_ttl = self.resolve_ttl(ttl)?;

        self.cleanup_expired();

        self.entries.insert(key, CacheEntry::new(value, effective_ttl));
        self.stats.record_insertion();
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns a copy of the live value for `key`, if any.
    ///
    /// Sweeps expired entries first, so an expired value is never returned.
    /// Does not change the entry's age.
    pub fn get(&mut self, key: &str) -> Option<V> {
        self.cleanup_expired();

        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Touch ==
    /// Resets the age of a live entry without changing its value or TTL.
    ///
    /// Returns `false` when the key is absent or already expired.
    pub fn touch(&mut self, key: &str) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) if !entry.is_expired() => {
                entry.touch();
                self.stats.record_touch();
                true
            }
            _ => false,
        }
    }

    // == Remove ==
    /// Removes an entry by key. Returns whether an entry was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Drops every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let count = before - self.entries.len();

        self.stats.record_expirations(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn default_ttl(&self) -> Option<Duration> {
        self.default_ttl
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn resolve_ttl(&self, ttl: Option<Duration>) -> Result<Duration> {
        match ttl.or(self.default_ttl) {
            Some(ttl) if ttl.is_zero() => Err(Error::Configuration(
                "TTL must be a positive duration".to_string(),
            )),
            Some(ttl) => Ok(ttl),
            None => Err(Error::Configuration(
                "no TTL given and the cache has no default TTL".to_string(),
            )),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    const FIVE_SECS: Duration = Duration::from_secs(5);

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new(None);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.default_ttl(), None);
    }

    #[test]
    fn test_store_put_and_get() {
        let mut store = CacheStore::new(Some(FIVE_SECS));

        store.put("key1".to_string(), "value1".to_string(), None).unwrap();

        assert_eq!(store.get("key1"), Some("value1".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new(Some(FIVE_SECS));
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(Some(FIVE_SECS));

        store.put("key1".to_string(), "value1".to_string(), None).unwrap();
        store.put("key1".to_string(), "value2".to_string(), None).unwrap();

        assert_eq!(store.get("key1"), Some("value2".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_put_without_any_ttl_fails() {
        let mut store = CacheStore::new(None);

        let result = store.put("key1".to_string(), 1, None);

        assert!(matches!(result, Err(Error::Configuration(_))));
        assert!(store.is_empty(), "Failed put must not modify the store");
    }

    #[test]
    fn test_put_with_explicit_ttl_and_no_default_succeeds() {
        let mut store = CacheStore::new(None);

        store.put("key1".to_string(), 1, Some(FIVE_SECS)).unwrap();

        assert_eq!(store.get("key1"), Some(1));
    }

    #[test]
    fn test_put_with_zero_ttl_fails() {
        let mut store = CacheStore::new(Some(FIVE_SECS));

        let result = store.put("key1".to_string(), 1, Some(Duration::ZERO));

        assert!(matches!(result, Err(Error::Configuration(_))));
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(None);
        store.put("key1".to_string(), "value1", Some(FIVE_SECS)).unwrap();

        advance(FIVE_SECS - Duration::from_millis(1)).await;
        assert_eq!(store.get("key1"), Some("value1"));

        advance(Duration::from_millis(2)).await;
        assert_eq!(store.get("key1"), None);
        assert_eq!(store.len(), 0, "Expired entry should be swept by get");
    }

    #[tokio::test(start_paused = true)]
    async fn test_per_call_ttl_overrides_default() {
        let mut store = CacheStore::new(Some(Duration::from_secs(600)));
        store.put("short".to_string(), 1, Some(Duration::from_secs(1))).unwrap();
        store.put("long".to_string(), 2, None).unwrap();

        advance(Duration::from_secs(2)).await;

        assert_eq!(store.get("short"), None);
        assert_eq!(store.get("long"), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_touch_extends_lifetime_and_keeps_value() {
        let mut store = CacheStore::new(None);
        store.put("key1".to_string(), "v1", Some(FIVE_SECS)).unwrap();

        advance(Duration::from_secs(4)).await;
        assert!(store.touch("key1"));

        advance(Duration::from_secs(4)).await;
        assert_eq!(store.get("key1"), Some("v1"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_touch_does_not_revive_expired_entry() {
        let mut store = CacheStore::new(None);
        store.put("key1".to_string(), "v1", Some(FIVE_SECS)).unwrap();

        advance(Duration::from_secs(6)).await;

        assert!(!store.touch("key1"));
        assert_eq!(store.get("key1"), None);
    }

    #[test]
    fn test_touch_missing_key_is_noop() {
        let mut store: CacheStore<u8> = CacheStore::new(Some(FIVE_SECS));
        assert!(!store.touch("missing"));
        assert_eq!(store.stats().touches, 0);
    }

    #[test]
    fn test_store_remove_and_clear() {
        let mut store = CacheStore::new(Some(FIVE_SECS));
        store.put("a".to_string(), 1, None).unwrap();
        store.put("b".to_string(), 2, None).unwrap();

        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_cleanup_expired() {
        let mut store = CacheStore::new(None);
        store.put("key1".to_string(), 1, Some(Duration::from_secs(1))).unwrap();
        store.put("key2".to_string(), 2, Some(Duration::from_secs(10))).unwrap();

        advance(Duration::from_secs(2)).await;

        assert_eq!(store.cleanup_expired(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("key2"), Some(2));
        assert_eq!(store.stats().expirations, 1);
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(Some(FIVE_SECS));

        store.put("key1".to_string(), 1, None).unwrap();
        store.get("key1"); // hit
        store.get("nonexistent"); // miss
        store.touch("key1");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.insertions, 1);
        assert_eq!(stats.touches, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
