//! Command line adapter for tubethumbs.
//!
//! `main.rs` is the composition root; everything it needs lives here so
//! handlers can be exercised from tests with fake fetchers.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by the binary only
use anyhow as _;
use dotenvy as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, OutputOptions, bootstrap};
pub use error::CliError;
pub use parser::Cli;
