//! API Module
//!
//! Typed endpoint clients. Each method supplies its endpoint name, parameters
//! and freshness TTL to the conditional requester and decodes the JSON body.
//!
//! # Clients
//! - [`PacemanStatsClient`] - `https://paceman.gg/stats/api/`
//! - [`PacemanClient`] - `https://paceman.gg/api/ars/`

pub mod live;
pub mod stats;

pub use live::PacemanClient;
pub use stats::{LeaderboardQuery, PacemanStatsClient, SessionQuery};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::params::Params;
use crate::requester::{ConditionalRequester, FetchOptions};
use crate::transport::Transport;

/// Fetches through the requester and decodes the body into `R`.
pub(crate) async fn fetch_as<T, R>(
    requester: &ConditionalRequester<T>,
    endpoint: &str,
    params: &Params,
    options: FetchOptions,
) -> Result<R>
where
    T: Transport,
    R: DeserializeOwned,
{
    let body = requester.fetch(endpoint, params, options).await?;
    serde_json::from_value(body).map_err(|source| Error::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}
