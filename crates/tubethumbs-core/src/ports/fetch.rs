//! Page fetcher port.
//!
//! A fetch either reaches the server and returns whatever status and body it
//! answered with, or fails at the transport level. A 404 page is a
//! successful fetch; the caller decides what a status means.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised before a response could be obtained.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// DNS, connect, TLS, timeout or body read failure.
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// The URL that was requested
        url: String,
        /// Transport error description
        message: String,
    },

    /// The URL could not be parsed.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Parser error description
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {message}")]
    ClientInit {
        /// Builder error description
        message: String,
    },
}

impl FetchError {
    /// Create a transport error.
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }
}

/// Request headers sent with every fetch.
///
/// Header names are stored lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders(BTreeMap<String, String>);

impl RequestHeaders {
    /// Empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Header map carrying only a user agent.
    #[must_use]
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        Self::new().with_header("User-Agent", user_agent)
    }

    /// Add or replace a header.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Look up a header by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// The configured user agent, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.get("user-agent")
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True only for `200 OK`.
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Port for issuing a single HTTP GET.
///
/// Implementations must not retry and must return non-success statuses as
/// `Ok` responses.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` with the given headers.
    async fn fetch(&self, url: &str, headers: &RequestHeaders) -> FetchResult<FetchResponse>;
}

/// Creates fetchers, one per worker.
///
/// Each call should return an independent instance (its own connection
/// pool) so workers never contend on a shared client.
pub trait FetcherFactory: Send + Sync {
    /// Build a new fetcher.
    fn create(&self) -> FetchResult<Arc<dyn PageFetcher>>;
}
