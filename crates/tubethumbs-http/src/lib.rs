//! `reqwest` implementation of the tubethumbs page fetcher port.
//!
//! Use [`ReqwestFetcherFactory`] to hand each download worker its own
//! client (and therefore its own connection pool).

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
mod factory;
mod http;

// ============================================================================
// Public API
// ============================================================================

pub use config::FetcherConfig;
pub use factory::ReqwestFetcherFactory;
pub use http::ReqwestFetcher;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
