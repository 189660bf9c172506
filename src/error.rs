//! Error types for the PaceMan client
//!
//! Provides unified error handling using thiserror. Every variant surfaces to
//! the caller of a fetch; nothing is retried or swallowed inside the client.

use thiserror::Error;

// == Client Error Enum ==
/// Unified error type for the caching client.
#[derive(Error, Debug)]
pub enum Error {
    /// No usable TTL (neither per-call nor store default), or an invalid
    /// configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Upstream answered with a status other than 2xx or 304
    #[error("Upstream returned HTTP {status} for endpoint {endpoint}")]
    Upstream { status: u16, endpoint: String },

    /// Upstream said "not modified" but no local copy exists
    #[error("Upstream reported {endpoint} unchanged but no cached copy exists for {key}")]
    Protocol { endpoint: String, key: String },

    /// Network or timeout failure reported by the transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Transport(format!("request timed out: {}", err))
        } else {
            Error::Transport(err.to_string())
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the client.
pub type Result<T> = std::result::Result<T, Error>;
