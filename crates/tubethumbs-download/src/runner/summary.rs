//! Run summary returned to callers.

use std::path::PathBuf;

use serde::Serialize;

/// Outcome of one playlist run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub playlist_id: Option<String>,
    /// Playlist title as extracted, before sanitization.
    pub playlist_title: String,
    /// Folder thumbnails were written to; `None` when nothing was dispatched.
    pub folder: Option<PathBuf>,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Summary of a run that found no videos.
    pub(crate) const fn empty(playlist_id: Option<String>, playlist_title: String) -> Self {
        Self {
            playlist_id,
            playlist_title,
            folder: None,
            total: 0,
            succeeded: 0,
            failed: 0,
        }
    }

    /// True when the playlist page listed no videos.
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// True when every dispatched download saved a file.
    pub const fn all_succeeded(&self) -> bool {
        self.failed == 0 && self.succeeded == self.total
    }
}
