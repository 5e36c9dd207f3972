//! Thumbnail downloading for tubethumbs.
//!
//! - `worker` - one video: page fetch, title extraction, image fetch, file write
//! - `runner` - playlist orchestration over a bounded pool of workers
//! - `progress` - progress snapshots and log throttling
//! - `paths` - destination file naming

#![deny(unused_crate_dependencies)]

mod error;
mod paths;
pub(crate) mod progress;
mod runner;
mod worker;

pub use error::{FetchStage, RunError, ThumbnailError};
pub use paths::ThumbnailDestination;
pub use progress::{DEFAULT_PROGRESS_INTERVAL, ProgressThrottle, ProgressUpdate};
pub use runner::{PlaylistRunner, RunSummary};
pub use worker::{SavedThumbnail, ThumbnailJob, WorkerDeps, download_thumbnail};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
