//! PaceMan Client - command-line demo
//!
//! Fetches one stats endpoint twice through the conditional requester and
//! prints the body and the cache statistics.
//!
//! # Usage
//! ```text
//! paceman-client <endpoint> [name=value ...]
//! paceman-client getSessionStats name=feinberg hours=24 hoursBetween=6
//! ```

use std::time::Duration;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paceman_client::{
    spawn_sweeper, Cache, ClientConfig, ConditionalRequester, FetchOptions, Params,
    ReqwestTransport,
};

/// TTL used when neither the command line nor the environment gives one.
const FALLBACK_TTL: Duration = Duration::from_secs(20);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paceman_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(endpoint) = args.next() else {
        bail!("usage: paceman-client <endpoint> [name=value ...]");
    };
    let params = args
        .map(|arg| {
            arg.split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .with_context(|| format!("expected name=value, got {:?}", arg))
        })
        .collect::<anyhow::Result<Params>>()?;

    let config = ClientConfig::from_env();
    info!(
        "Configuration loaded: base_url={}, default_ttl={:?}, use_cache={}, timeout={:?}",
        config.stats_base_url, config.default_ttl, config.use_cache, config.timeout
    );

    let cache = Cache::new(config.default_ttl.or(Some(FALLBACK_TTL)));
    let sweeper = config
        .sweep_interval
        .map(|interval| spawn_sweeper(cache.clone(), interval));

    let transport = ReqwestTransport::new(config.timeout)?;
    let requester = ConditionalRequester::new(config.stats_base_url.clone(), transport, cache);
    let options = FetchOptions::default().use_cache(config.use_cache);

    let body = requester
        .fetch(&endpoint, &params, options)
        .await
        .with_context(|| format!("first fetch of {} failed", endpoint))?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    // Second call revalidates instead of downloading again when upstream sent an ETag
    requester
        .fetch(&endpoint, &params, options)
        .await
        .with_context(|| format!("revalidation of {} failed", endpoint))?;

    let stats = requester.cache().stats();
    info!(
        "Cache stats: {} (hit_rate={:.2})",
        serde_json::to_string(&stats)?,
        stats.hit_rate()
    );

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }

    Ok(())
}
