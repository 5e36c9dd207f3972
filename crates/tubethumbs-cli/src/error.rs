//! CLI error type and exit code mapping.

use thiserror::Error;
use tubethumbs_core::ConfigError;
use tubethumbs_download::RunError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The run could not start or finish for a reason other than I/O or config.
    #[error("{0}")]
    Run(String),

    /// IO error (folder creation, stdout).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code following sysexits.h.
    ///
    /// Per-video failures never reach here: a run that completes exits 0.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Run(_) => 1,
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<RunError> for CliError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Config(e) => Self::Config(e.to_string()),
            RunError::Path(e) => Self::Io(e.to_string()),
            RunError::Fetcher(e) => Self::Run(e.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(format!("cannot encode summary: {err}"))
    }
}
