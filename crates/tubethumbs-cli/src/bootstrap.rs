//! CLI bootstrap - the composition root.
//!
//! Turns parsed arguments into a validated [`RunConfig`], a reqwest-backed
//! fetcher factory and a [`PlaylistRunner`]. Handlers only see the
//! resulting [`CliContext`].

use std::sync::Arc;
use std::time::Duration;

use tubethumbs_core::{FetcherFactory, RunConfig};
use tubethumbs_download::PlaylistRunner;
use tubethumbs_http::{FetcherConfig, ReqwestFetcherFactory};

use crate::error::CliError;
use crate::parser::Cli;

/// How results are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print the summary as JSON instead of text.
    pub json: bool,
    /// Draw a progress bar on stderr.
    pub progress: bool,
}

impl OutputOptions {
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            progress: !cli.no_progress,
        }
    }
}

/// Fully composed context for CLI handlers.
pub struct CliContext {
    pub runner: PlaylistRunner,
    pub output: OutputOptions,
}

impl CliContext {
    /// Compose a context around any fetcher factory.
    pub fn new(
        factory: Arc<dyn FetcherFactory>,
        config: RunConfig,
        output: OutputOptions,
    ) -> Result<Self, CliError> {
        config.validate()?;
        Ok(Self {
            runner: PlaylistRunner::new(factory, config),
            output,
        })
    }
}

/// Run configuration from parsed arguments.
pub fn run_config(cli: &Cli) -> RunConfig {
    RunConfig::new()
        .with_root_folder(&cli.output_root)
        .with_concurrency(cli.concurrency)
        .with_user_agent(&cli.user_agent)
}

/// HTTP client configuration from parsed arguments.
pub fn fetcher_config(cli: &Cli) -> FetcherConfig {
    FetcherConfig::new()
        .with_user_agent(&cli.user_agent)
        .with_optional_timeout(cli.timeout_secs.map(Duration::from_secs))
        .with_connect_timeout(cli.connect_timeout_secs.map(Duration::from_secs))
}

/// Build the production context.
///
/// Configuration is validated here, before any network I/O.
pub fn bootstrap(cli: &Cli) -> Result<CliContext, CliError> {
    let factory = Arc::new(ReqwestFetcherFactory::new(fetcher_config(cli)));
    let config = run_config(cli);

    tracing::debug!(
        concurrency = config.concurrency,
        root = %config.root_folder.display(),
        "Bootstrapped CLI context"
    );

    CliContext::new(factory, config, OutputOptions::from_cli(cli))
}
