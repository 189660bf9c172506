//! Conditional Requester
//!
//! Turns `fetch(endpoint, params)` into at most one network round trip,
//! revalidating cached bodies with `If-None-Match` and keeping the cache
//! consistent with what upstream reports.
//!
//! Concurrent fetches of the same key are not deduplicated: two tasks racing
//! on a cold key both hit the network and the last `put` wins.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::Cache;
use crate::error::{Error, Result};
use crate::params::{cache_key, Params};
use crate::transport::{Transport, TransportRequest, TransportResponse, ETAG, IF_NONE_MATCH};

// == Cached Response ==
/// A cached body together with the validation token upstream sent for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedResponse {
    pub body: Value,
    pub etag: String,
}

// == Fetch Options ==
/// Per-call knobs for [`ConditionalRequester::fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Look up and revalidate the cached copy before going to the network
    pub use_cache: bool,
    /// TTL for a newly stored body; falls back to the cache default
    pub ttl: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            ttl: None,
        }
    }
}

impl FetchOptions {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            ..Self::default()
        }
    }

    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }
}

// == Conditional Requester ==
pub struct ConditionalRequester<T> {
    base_url: String,
    transport: T,
    cache: Cache<CachedResponse>,
}

impl<T: Transport> ConditionalRequester<T> {
    /// Creates a requester that resolves endpoints against `base_url`.
    pub fn new(base_url: impl Into<String>, transport: T, cache: Cache<CachedResponse>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            cache,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle to the cache this requester reads and writes.
    pub fn cache(&self) -> &Cache<CachedResponse> {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // == Fetch ==
    /// Fetches `endpoint` with `params`, returning the JSON body.
    ///
    /// A live cached copy is revalidated with its ETag; a 304 answer reuses it
    /// and resets its age. A 2xx answer carrying an ETag is stored, whether or
    /// not `use_cache` was set. Failure paths never modify the cache.
    pub async fn fetch(&self, endpoint: &str, params: &Params, options: FetchOptions) -> Result<Value> {
        let key = cache_key(endpoint, params);
        let cached = if options.use_cache {
            self.cache.get(&key)
        } else {
            None
        };

        let mut request = TransportRequest {
            url: format!("{}{}", self.base_url, endpoint),
            query: params.to_query(),
            headers: Vec::new(),
        };
        if let Some(cached) = &cached {
            debug!(key = %key, etag = %cached.etag, "Revalidating cached response");
            request
                .headers
                .push((IF_NONE_MATCH.to_string(), cached.etag.clone()));
        }

        let response = self.transport.get(request).await?;

        if response.is_not_modified() {
            return self.revalidated(endpoint, &key, cached.is_some());
        }
        if !response.is_success() {
            return Err(Error::Upstream {
                status: response.status,
                endpoint: endpoint.to_string(),
            });
        }

        self.store(endpoint, key, response, options.ttl)
    }

    fn revalidated(&self, endpoint: &str, key: &str, sent_token: bool) -> Result<Value> {
        if sent_token {
            self.cache.touch(key);
            // The entry may have expired between lookup and response.
            if let Some(entry) = self.cache.get(key) {
                debug!(key = %key, "Upstream confirmed cached response");
                return Ok(entry.body);
            }
        }

        warn!(endpoint, key = %key, "Not-modified response without a cached copy");
        Err(Error::Protocol {
            endpoint: endpoint.to_string(),
            key: key.to_string(),
        })
    }

    fn store(
        &self,
        endpoint: &str,
        key: String,
        response: TransportResponse,
        ttl: Option<Duration>,
    ) -> Result<Value> {
        let body: Value = serde_json::from_slice(&response.body).map_err(|source| Error::Decode {
            endpoint: endpoint.to_string(),
            source,
        })?;

        match response.header(ETAG) {
            Some(etag) => {
                debug!(key = %key, etag, "Caching response");
                let entry = CachedResponse {
                    body: body.clone(),
                    etag: etag.to_string(),
                };
                self.cache.put(key, entry, ttl)?;
            }
            None => debug!(key = %key, "Response carried no ETag, not caching"),
        }

        Ok(body)
    }
}
