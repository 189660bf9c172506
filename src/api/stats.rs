//! Stats API Client
//!
//! Typed methods for the PaceMan stats endpoints. TTLs follow the caching
//! intervals upstream asks clients to respect.

use std::time::Duration;

use crate::api::fetch_as;
use crate::cache::Cache;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::{
    LeaderboardDays, LeaderboardEntry, LeaderboardType, Run, SessionStats, Split, SplitStats,
    Timestamp, World,
};
use crate::params::Params;
use crate::requester::{CachedResponse, ConditionalRequester, FetchOptions};
use crate::transport::{ReqwestTransport, Transport};

/// TTL for session, split and recent-run stats.
pub const SESSION_TTL: Duration = Duration::from_secs(20);
/// TTL for a single run's data.
pub const WORLD_TTL: Duration = Duration::from_secs(5);
/// TTL for leaderboards, which are expensive to compute upstream.
pub const LEADERBOARD_TTL: Duration = Duration::from_secs(10 * 60);
/// TTL for recent split timestamps.
pub const TIMESTAMPS_TTL: Duration = Duration::from_secs(10);

// == Session Query ==
/// Time window shared by the per-player stats endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionQuery {
    /// How many hours of stats to include
    pub hours: u32,
    /// Max hours between runs in one session
    pub hours_between: u32,
}

impl Default for SessionQuery {
    fn default() -> Self {
        Self {
            hours: 24,
            hours_between: 6,
        }
    }
}

impl SessionQuery {
    fn params(&self, name: &str) -> Params {
        Params::new()
            .with("name", name)
            .with("hours", self.hours)
            .with("hoursBetween", self.hours_between)
    }
}

// == Leaderboard Query ==
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub days: LeaderboardDays,
    pub category: Split,
    pub kind: LeaderboardType,
    /// Max number of players (upstream caps this at 999999)
    pub limit: u32,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            days: LeaderboardDays::Month,
            category: Split::Nether,
            kind: LeaderboardType::Count,
            limit: 10,
        }
    }
}

// == Stats Client ==
/// Client for `https://paceman.gg/stats/api/`.
pub struct PacemanStatsClient<T = ReqwestTransport> {
    requester: ConditionalRequester<T>,
    use_cache: bool,
}

impl PacemanStatsClient<ReqwestTransport> {
    /// Creates a client with its own cache and a reqwest transport.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }
}

impl<T: Transport> PacemanStatsClient<T> {
    pub fn with_transport(config: &ClientConfig, transport: T) -> Self {
        Self::with_cache(config, transport, Cache::new(config.default_ttl))
    }

    /// Creates a client over an existing cache handle, e.g. one shared with
    /// a [`crate::api::PacemanClient`].
    pub fn with_cache(config: &ClientConfig, transport: T, cache: Cache<CachedResponse>) -> Self {
        Self {
            requester: ConditionalRequester::new(config.stats_base_url.clone(), transport, cache),
            use_cache: config.use_cache,
        }
    }

    pub fn cache(&self) -> &Cache<CachedResponse> {
        self.requester.cache()
    }

    pub fn requester(&self) -> &ConditionalRequester<T> {
        &self.requester
    }

    fn options(&self, ttl: Duration) -> FetchOptions {
        FetchOptions::with_ttl(ttl).use_cache(self.use_cache)
    }

    /// Nether enter count and average for a player's session.
    pub async fn get_session_nethers(&self, name: &str, query: SessionQuery) -> Result<SplitStats> {
        fetch_as(
            &self.requester,
            "getSessionNethers",
            &query.params(name),
            self.options(SESSION_TTL),
        )
        .await
    }

    /// Counts and averages for every split in a player's session.
    pub async fn get_session_stats(&self, name: &str, query: SessionQuery) -> Result<SessionStats> {
        fetch_as(
            &self.requester,
            "getSessionStats",
            &query.params(name),
            self.options(SESSION_TTL),
        )
        .await
    }

    /// Count and average for one split, optionally ignoring runs slower than
    /// `max_time` milliseconds.
    pub async fn get_split_stats(
        &self,
        name: &str,
        split: Split,
        query: SessionQuery,
        max_time: Option<u64>,
    ) -> Result<SplitStats> {
        let params = query
            .params(name)
            .with("split", split)
            .with_opt("maxTime", max_time);
        fetch_as(&self.requester, "getSplitStats", &params, self.options(SESSION_TTL)).await
    }

    /// Data for a single run, by numeric run id or world id hash.
    ///
    /// Returns `None` when upstream answers with `null`.
    pub async fn get_world(&self, world_id: &str) -> Result<Option<World>> {
        let params = Params::new().with("worldId", world_id);
        fetch_as(&self.requester, "getWorld", &params, self.options(WORLD_TTL)).await
    }

    /// A player's most recent runs.
    pub async fn get_recent_runs(
        &self,
        name: &str,
        query: SessionQuery,
        limit: u32,
    ) -> Result<Vec<Run>> {
        let params = query.params(name).with("limit", limit);
        fetch_as(&self.requester, "getRecentRuns", &params, self.options(SESSION_TTL)).await
    }

    pub async fn get_leaderboard(&self, query: LeaderboardQuery) -> Result<Vec<LeaderboardEntry>> {
        let params = Params::new()
            .with("days", query.days)
            .with("category", query.category)
            .with("type", query.kind)
            .with("limit", query.limit);
        fetch_as(&self.requester, "getLeaderboard", &params, self.options(LEADERBOARD_TTL)).await
    }

    /// Unix timestamps of splits in recent runs, for clipping recordings.
    pub async fn get_recent_timestamps(
        &self,
        name: &str,
        limit: u32,
        only_fort: bool,
    ) -> Result<Vec<Timestamp>> {
        let params = Params::new()
            .with("name", name)
            .with("limit", limit)
            .with("onlyFort", only_fort);
        fetch_as(
            &self.requester,
            "getRecentTimestamps",
            &params,
            self.options(TIMESTAMPS_TTL),
        )
        .await
    }
}
