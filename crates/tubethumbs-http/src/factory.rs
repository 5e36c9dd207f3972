//! Factory producing one independent `ReqwestFetcher` per caller.

use std::sync::Arc;

use tubethumbs_core::{FetchResult, FetcherFactory, PageFetcher};

use crate::config::FetcherConfig;
use crate::http::ReqwestFetcher;

/// Builds a fresh HTTP client on every `create` call.
///
/// Download workers each ask for their own fetcher, so clients (and their
/// connection pools) are never shared between workers.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcherFactory {
    config: FetcherConfig,
}

impl ReqwestFetcherFactory {
    pub const fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &FetcherConfig {
        &self.config
    }
}

impl FetcherFactory for ReqwestFetcherFactory {
    fn create(&self) -> FetchResult<Arc<dyn PageFetcher>> {
        let fetcher = ReqwestFetcher::new(&self.config)?;
        tracing::trace!("Created HTTP fetcher");
        Ok(Arc::new(fetcher))
    }
}
