//! Run configuration and validation.

use std::path::PathBuf;

use crate::paths::DEFAULT_ROOT_FOLDER;
use crate::ports::RequestHeaders;
use crate::urls::SiteUrls;

/// Default number of concurrent download workers.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Upper bound on concurrent workers.
pub const MAX_CONCURRENCY: usize = 64;

/// User agent sent with every request; bare clients get blocked.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Configuration for one playlist run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Folder under which per-playlist folders are created.
    pub root_folder: PathBuf,
    /// Number of concurrent download workers.
    pub concurrency: usize,
    /// User agent header value.
    pub user_agent: String,
    /// Watch page and thumbnail URL templates.
    pub urls: SiteUrls,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root_folder: PathBuf::from(DEFAULT_ROOT_FOLDER),
            concurrency: DEFAULT_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            urls: SiteUrls::default(),
        }
    }
}

impl RunConfig {
    /// Create a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root output folder.
    #[must_use]
    pub fn with_root_folder(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_folder = root.into();
        self
    }

    /// Set the number of concurrent workers.
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the URL templates.
    #[must_use]
    pub fn with_urls(mut self, urls: SiteUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Headers sent with every request of this run.
    pub fn headers(&self) -> RequestHeaders {
        RequestHeaders::with_user_agent(self.user_agent.clone())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CONCURRENCY).contains(&self.concurrency) {
            return Err(ConfigError::InvalidConcurrency(self.concurrency));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }

        if self.user_agent.chars().any(char::is_control) {
            return Err(ConfigError::InvalidUserAgent(self.user_agent.clone()));
        }

        if self.root_folder.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRootFolder);
        }

        Ok(())
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Concurrency must be between 1 and {max}, got {0}", max = MAX_CONCURRENCY)]
    InvalidConcurrency(usize),

    #[error("User agent cannot be empty")]
    EmptyUserAgent,

    #[error("User agent contains control characters: {0:?}")]
    InvalidUserAgent(String),

    #[error("Root folder cannot be empty")]
    EmptyRootFolder,
}
