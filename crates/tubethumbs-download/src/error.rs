//! Errors for single downloads and whole runs.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use tubethumbs_core::{ConfigError, FetchError, PathError, VideoId};

/// Which request of a download failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    /// The per-video watch page.
    Page,
    /// The thumbnail image.
    Thumbnail,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page => f.write_str("video page"),
            Self::Thumbnail => f.write_str("thumbnail"),
        }
    }
}

/// Failure of one thumbnail download. Never fatal to the run.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Failed to fetch {stage} for {video_id}: {source}")]
    Fetch {
        video_id: VideoId,
        stage: FetchStage,
        #[source]
        source: FetchError,
    },

    #[error("{stage} for {video_id} returned HTTP {status}")]
    Status {
        video_id: VideoId,
        stage: FetchStage,
        status: u16,
    },

    #[error("No title found on the video page for {video_id}")]
    MissingTitle { video_id: VideoId },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        video_id: VideoId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No fetcher available for {video_id}: {source}")]
    Fetcher {
        video_id: VideoId,
        #[source]
        source: FetchError,
    },
}

impl ThumbnailError {
    /// The video this failure belongs to.
    pub const fn video_id(&self) -> &VideoId {
        match self {
            Self::Fetch { video_id, .. }
            | Self::Status { video_id, .. }
            | Self::MissingTitle { video_id }
            | Self::Write { video_id, .. }
            | Self::Fetcher { video_id, .. } => video_id,
        }
    }
}

/// Errors that stop a run before or while preparing downloads.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot prepare output folder: {0}")]
    Path(#[from] PathError),

    #[error("Cannot create fetcher: {0}")]
    Fetcher(#[from] FetchError),
}
