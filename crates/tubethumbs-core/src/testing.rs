//! Test doubles for the fetcher ports.
//!
//! Available with the `test-utils` feature so downstream crates can drive
//! extraction and download code without a network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::ports::{
    FetchError, FetchResponse, FetchResult, FetcherFactory, PageFetcher, RequestHeaders,
};

/// Canned outcome for a URL pattern.
#[derive(Debug, Clone)]
pub enum CannedResponse {
    /// Server answered with this status and body.
    Response(FetchResponse),
    /// Transport-level failure.
    TransportError(String),
}

/// A request observed by the fake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Requested URL.
    pub url: String,
    /// User agent header, if sent.
    pub user_agent: Option<String>,
}

/// A fake fetcher that returns canned responses keyed by URL substring.
///
/// Routes are matched in insertion order; the first pattern contained in
/// the URL wins. Unmatched URLs get the default response, or a 404.
/// Clones share the request log.
#[derive(Clone, Default)]
pub struct FakeFetcher {
    routes: Vec<(String, CannedResponse)>,
    default_response: Option<CannedResponse>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeFetcher {
    /// Create a fake with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer URLs containing `url_contains` with `status` and `body`.
    #[must_use]
    pub fn with_response(
        mut self,
        url_contains: &str,
        status: u16,
        body: impl Into<Vec<u8>>,
    ) -> Self {
        self.routes.push((
            url_contains.to_string(),
            CannedResponse::Response(FetchResponse::new(status, body)),
        ));
        self
    }

    /// Answer URLs containing `url_contains` with a `200` HTML page.
    #[must_use]
    pub fn with_page(self, url_contains: &str, html: &str) -> Self {
        self.with_response(url_contains, 200, html.as_bytes().to_vec())
    }

    /// Fail URLs containing `url_contains` at the transport level.
    #[must_use]
    pub fn with_transport_error(mut self, url_contains: &str, message: &str) -> Self {
        self.routes.push((
            url_contains.to_string(),
            CannedResponse::TransportError(message.to_string()),
        ));
        self
    }

    /// Response for URLs that match no route.
    #[must_use]
    pub fn with_default(mut self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.default_response = Some(CannedResponse::Response(FetchResponse::new(status, body)));
        self
    }

    /// All requests observed so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests whose URL contains `url_contains`.
    pub fn request_count(&self, url_contains: &str) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.url.contains(url_contains))
            .count()
    }

    fn find_response(&self, url: &str) -> CannedResponse {
        self.routes
            .iter()
            .find(|(pattern, _)| url.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .unwrap_or_else(|| CannedResponse::Response(FetchResponse::new(404, Vec::new())))
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str, headers: &RequestHeaders) -> FetchResult<FetchResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedRequest {
                url: url.to_string(),
                user_agent: headers.user_agent().map(ToString::to_string),
            });

        match self.find_response(url) {
            CannedResponse::Response(response) => Ok(response),
            CannedResponse::TransportError(message) => Err(FetchError::transport(url, message)),
        }
    }
}

/// Factory handing out clones of one [`FakeFetcher`].
///
/// Counts how many fetchers were created; can be told to fail.
pub struct FakeFetcherFactory {
    fetcher: FakeFetcher,
    created: AtomicUsize,
    fail_with: Option<String>,
}

impl FakeFetcherFactory {
    /// Factory producing clones of `fetcher`.
    pub const fn new(fetcher: FakeFetcher) -> Self {
        Self {
            fetcher,
            created: AtomicUsize::new(0),
            fail_with: None,
        }
    }

    /// Factory whose every `create` call fails.
    pub fn failing(message: &str) -> Self {
        Self {
            fetcher: FakeFetcher::new(),
            created: AtomicUsize::new(0),
            fail_with: Some(message.to_string()),
        }
    }

    /// Number of successful `create` calls.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// The shared fake, for inspecting requests.
    pub const fn fetcher(&self) -> &FakeFetcher {
        &self.fetcher
    }
}

impl FetcherFactory for FakeFetcherFactory {
    fn create(&self) -> FetchResult<Arc<dyn PageFetcher>> {
        if let Some(message) = &self.fail_with {
            return Err(FetchError::ClientInit {
                message: message.clone(),
            });
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(self.fetcher.clone()))
    }
}
