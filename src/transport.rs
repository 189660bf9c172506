//! HTTP Transport
//!
//! The narrow contract the requester needs from the network: issue a GET with
//! query parameters and headers, get back a status, headers and a body.
//! Requests and responses are plain data so tests can script them.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::trace;

use crate::error::{Error, Result};

/// Conditional revalidation request header.
pub const IF_NONE_MATCH: &str = "If-None-Match";

/// Validation token response header.
pub const ETAG: &str = "ETag";

const USER_AGENT: &str = concat!("paceman-client/", env!("CARGO_PKG_VERSION"));

// == Transport Request ==
/// A GET request described as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl TransportRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

// == Transport Response ==
/// A response described as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_modified(&self) -> bool {
        self.status == 304
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

// == Transport Trait ==
/// Performs HTTP GETs on behalf of the requester.
///
/// Network and timeout failures are reported as [`Error::Transport`]; any
/// HTTP status, including errors, is returned as a response.
pub trait Transport: Send + Sync {
    fn get(&self, request: TransportRequest) -> impl Future<Output = Result<TransportResponse>> + Send;
}

// == Reqwest Transport ==
/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, request: TransportRequest) -> Result<TransportResponse> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        trace!(url = %request.url, status, bytes = body.len(), "HTTP GET completed");

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
