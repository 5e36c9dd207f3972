//! Reqwest implementation of the `PageFetcher` port.
//!
//! One GET per call, no retries. Any status the server answers with is
//! returned as a response; only transport failures become errors.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tubethumbs_core::{FetchError, FetchResponse, FetchResult, PageFetcher, RequestHeaders};
use url::Url;

use crate::config::FetcherConfig;
use crate::error::{HttpError, HttpResult};

/// Page fetcher backed by its own `reqwest::Client` and connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Build a fetcher with a fresh client from `config`.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(config)?,
        })
    }

    /// Issue the GET and collect status and body.
    async fn get(&self, url: &str, headers: &RequestHeaders) -> HttpResult<FetchResponse> {
        let parsed = Url::parse(url).map_err(|source| HttpError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let header_map = to_header_map(url, headers)?;

        let response = self
            .client
            .get(parsed)
            .headers(header_map)
            .send()
            .await
            .map_err(|source| HttpError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|source| HttpError::Request {
                url: url.to_string(),
                source,
            })?;

        tracing::debug!(url, status, bytes = body.len(), "Fetched");
        Ok(FetchResponse::new(status, body.to_vec()))
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str, headers: &RequestHeaders) -> FetchResult<FetchResponse> {
        self.get(url, headers).await.map_err(Into::into)
    }
}

/// Build a client from the public configuration.
fn build_client(config: &FetcherConfig) -> HttpResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = config.connect_timeout {
        builder = builder.connect_timeout(timeout);
    }

    builder.build().map_err(HttpError::ClientBuild)
}

/// Convert port headers into a reqwest header map.
fn to_header_map(url: &str, headers: &RequestHeaders) -> HttpResult<HeaderMap> {
    let mut map = HeaderMap::new();
    for (name, value) in headers.iter() {
        let invalid = || HttpError::InvalidHeader {
            url: url.to_string(),
            name: name.to_string(),
        };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
