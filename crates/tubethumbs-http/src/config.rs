//! Public configuration for the HTTP fetcher.
//!
//! Every field maps onto a `reqwest::ClientBuilder` setting. Unset timeouts
//! leave the transport defaults in place.

use std::time::Duration;

use tubethumbs_core::DEFAULT_USER_AGENT;

/// Configuration for [`ReqwestFetcher`](crate::ReqwestFetcher).
///
/// # Example
///
/// ```
/// use tubethumbs_http::FetcherConfig;
/// use std::time::Duration;
///
/// let config = FetcherConfig::new()
///     .with_timeout(Duration::from_secs(20))
///     .with_user_agent("Mozilla/5.0 (X11; Linux x86_64)");
/// ```
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Fallback user agent when a request carries none
    pub(crate) user_agent: String,
    /// Whole-request timeout
    pub(crate) timeout: Option<Duration>,
    /// Connection establishment timeout
    pub(crate) connect_timeout: Option<Duration>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl FetcherConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback user agent.
    ///
    /// Defaults to `Mozilla/5.0`.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a whole-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set an optional whole-request timeout.
    #[must_use]
    pub const fn with_optional_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set an optional connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub const fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }
}
