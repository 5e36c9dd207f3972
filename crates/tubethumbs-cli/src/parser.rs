//! Command line definition.

use std::path::PathBuf;

use clap::Parser;
use tubethumbs_core::{DEFAULT_CONCURRENCY, DEFAULT_ROOT_FOLDER, DEFAULT_USER_AGENT};

/// Download the thumbnail of every video in a YouTube playlist.
///
/// Files are written to `<output root>/<playlist title>/<video title>.jpg`.
#[derive(Debug, Parser)]
#[command(name = "tubethumbs")]
#[command(about = "Download the thumbnails of every video in a YouTube playlist")]
#[command(version)]
pub struct Cli {
    /// Playlist URL, e.g. https://www.youtube.com/playlist?list=PL...
    pub playlist_url: String,

    /// Number of concurrent download workers (1-64)
    #[arg(
        short = 'c',
        long,
        env = "TUBETHUMBS_CONCURRENCY",
        default_value_t = DEFAULT_CONCURRENCY
    )]
    pub concurrency: usize,

    /// Folder that receives one sub-folder per playlist
    #[arg(
        short = 'o',
        long = "output-root",
        env = "TUBETHUMBS_OUTPUT_ROOT",
        default_value = DEFAULT_ROOT_FOLDER
    )]
    pub output_root: PathBuf,

    /// User-Agent header sent with every request
    #[arg(long = "user-agent", env = "TUBETHUMBS_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-request timeout in seconds (transport default when unset)
    #[arg(long = "timeout-secs")]
    pub timeout_secs: Option<u64>,

    /// Connect timeout in seconds (transport default when unset)
    #[arg(long = "connect-timeout-secs")]
    pub connect_timeout_secs: Option<u64>,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Disable the progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
