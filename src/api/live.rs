//! Live Runs API Client

use std::time::Duration;

use crate::api::fetch_as;
use crate::cache::Cache;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::LiveRun;
use crate::params::Params;
use crate::requester::{CachedResponse, ConditionalRequester, FetchOptions};
use crate::transport::{ReqwestTransport, Transport};

/// TTL for the live-runs list.
pub const LIVE_RUNS_TTL: Duration = Duration::from_secs(5);

/// Game version queried when none is given.
pub const DEFAULT_GAME_VERSION: &str = "1.16.1";

/// Client for `https://paceman.gg/api/ars/`.
pub struct PacemanClient<T = ReqwestTransport> {
    requester: ConditionalRequester<T>,
    use_cache: bool,
}

impl PacemanClient<ReqwestTransport> {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }
}

impl<T: Transport> PacemanClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self::with_cache(config, transport, Cache::new(config.default_ttl))
    }

    pub fn with_cache(config: &ClientConfig, transport: T, cache: Cache<CachedResponse>) -> Self {
        Self {
            requester: ConditionalRequester::new(config.ars_base_url.clone(), transport, cache),
            use_cache: config.use_cache,
        }
    }

    pub fn cache(&self) -> &Cache<CachedResponse> {
        self.requester.cache()
    }

    /// All runs currently in progress for `version`, defaulting to
    /// [`DEFAULT_GAME_VERSION`].
    pub async fn get_live_runs(
        &self,
        version: Option<&str>,
        live_only: bool,
    ) -> Result<Vec<LiveRun>> {
        let params = live_runs_params(version, live_only);
        let options = FetchOptions::with_ttl(LIVE_RUNS_TTL).use_cache(self.use_cache);
        fetch_as(&self.requester, "liveruns", &params, options).await
    }
}

fn live_runs_params(version: Option<&str>, live_only: bool) -> Params {
    Params::new()
        .with("version", version.unwrap_or(DEFAULT_GAME_VERSION))
        .with("liveOnly", live_only)
}
