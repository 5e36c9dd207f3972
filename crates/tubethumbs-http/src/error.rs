//! Internal error types for HTTP operations.
//!
//! These errors are internal to `tubethumbs-http` and are mapped to the
//! core `FetchError` at the port boundary.

use thiserror::Error;
use tubethumbs_core::FetchError;

/// Result type alias for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors raised by the reqwest fetcher.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The client builder rejected the configuration.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Sending the request or reading the body failed.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// The URL that was requested
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// A header name or value is not valid HTTP.
    #[error("Invalid header '{name}' for {url}")]
    InvalidHeader {
        /// The URL that was requested
        url: String,
        /// Offending header name
        name: String,
    },

    /// URL parsing error.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Parser error
        #[source]
        source: url::ParseError,
    },
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ClientBuild(source) => Self::ClientInit {
                message: source.to_string(),
            },
            HttpError::Request { url, source } => Self::Transport {
                url,
                message: describe_request_error(&source),
            },
            HttpError::InvalidHeader { url, name } => Self::Transport {
                url,
                message: format!("invalid header '{name}'"),
            },
            HttpError::InvalidUrl { url, source } => Self::InvalidUrl {
                url,
                message: source.to_string(),
            },
        }
    }
}

/// Short classification plus reqwest's own message.
fn describe_request_error(err: &reqwest::Error) -> String {
    let kind = if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_body() || err.is_decode() {
        "body"
    } else {
        "request"
    };
    format!("{kind}: {err}")
}
