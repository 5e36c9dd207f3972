//! Destination file naming for thumbnails.

use std::path::{Path, PathBuf};

use tubethumbs_core::{VideoId, sanitize_or};

/// Extension of every saved thumbnail.
const THUMBNAIL_EXTENSION: &str = "jpg";

/// A planned thumbnail file inside a playlist folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailDestination {
    /// Playlist folder the file is written to.
    pub folder: PathBuf,
    /// File name including extension.
    pub file_name: String,
}

impl ThumbnailDestination {
    /// Plan the file for a video titled `title`.
    ///
    /// The title is sanitized; when nothing usable is left the video id
    /// names the file instead.
    pub fn plan(folder: &Path, title: &str, video_id: &VideoId) -> Self {
        let stem = sanitize_or(title, video_id.as_str());
        Self {
            folder: folder.to_path_buf(),
            file_name: format!("{stem}.{THUMBNAIL_EXTENSION}"),
        }
    }

    /// Full path of the file.
    pub fn path(&self) -> PathBuf {
        self.folder.join(&self.file_name)
    }
}
