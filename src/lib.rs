//! PaceMan Client - A caching client for the PaceMan speedrun statistics API
//!
//! Requests go through a [`ConditionalRequester`], which keeps bodies in a
//! thread-safe TTL [`Cache`] and revalidates them with ETags so unchanged
//! data is never downloaded twice.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod params;
pub mod requester;
pub mod tasks;
pub mod transport;

pub use api::{LeaderboardQuery, PacemanClient, PacemanStatsClient, SessionQuery};
pub use cache::{Cache, CacheStats};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use params::{cache_key, Params};
pub use requester::{CachedResponse, ConditionalRequester, FetchOptions};
pub use tasks::spawn_sweeper;
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
