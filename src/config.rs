//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default base URL of the PaceMan stats API.
pub const DEFAULT_STATS_BASE_URL: &str = "https://paceman.gg/stats/api/";

/// Default base URL of the PaceMan live-runs (ARS) API.
pub const DEFAULT_ARS_BASE_URL: &str = "https://paceman.gg/api/ars/";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL for stats endpoints
    pub stats_base_url: String,
    /// Base URL for live-run endpoints
    pub ars_base_url: String,
    /// Store-wide TTL for fetches that do not supply one
    pub default_ttl: Option<Duration>,
    /// Whether fetches consult the cache by default
    pub use_cache: bool,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Interval of the background sweep task; `None` disables it
    pub sweep_interval: Option<Duration>,
}

impl ClientConfig {
    /// Creates a new ClientConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PACEMAN_STATS_BASE_URL` - Stats API base URL
    /// - `PACEMAN_ARS_BASE_URL` - Live-runs API base URL
    /// - `PACEMAN_DEFAULT_TTL` - Default TTL in seconds (default: unset)
    /// - `PACEMAN_USE_CACHE` - `true`/`false` (default: true)
    /// - `PACEMAN_TIMEOUT` - Request timeout in seconds (default: 10)
    /// - `PACEMAN_SWEEP_INTERVAL` - Sweep interval in seconds (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            stats_base_url: env::var("PACEMAN_STATS_BASE_URL").unwrap_or(defaults.stats_base_url),
            ars_base_url: env::var("PACEMAN_ARS_BASE_URL").unwrap_or(defaults.ars_base_url),
            default_ttl: env_secs("PACEMAN_DEFAULT_TTL").or(defaults.default_ttl),
            use_cache: env::var("PACEMAN_USE_CACHE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.use_cache),
            timeout: env_secs("PACEMAN_TIMEOUT").unwrap_or(defaults.timeout),
            sweep_interval: env_secs("PACEMAN_SWEEP_INTERVAL").or(defaults.sweep_interval),
        }
    }
}

/// Reads a positive number of seconds; zero and unparsable values are ignored.
fn env_secs(name: &str) -> Option<Duration> {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stats_base_url: DEFAULT_STATS_BASE_URL.to_string(),
            ars_base_url: DEFAULT_ARS_BASE_URL.to_string(),
            default_ttl: None,
            use_cache: true,
            timeout: Duration::from_secs(10),
            sweep_interval: None,
        }
    }
}
