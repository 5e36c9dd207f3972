//! Templated site URLs.

use crate::domain::VideoId;

/// Default base of per-video watch pages.
pub const DEFAULT_WATCH_BASE: &str = "https://www.youtube.com/watch";

/// Default base of the thumbnail image host.
pub const DEFAULT_THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Highest-resolution thumbnail variant. Not every video has one; there is
/// no fallback to smaller variants.
pub const THUMBNAIL_VARIANT: &str = "maxresdefault.jpg";

/// Bases used to build per-video URLs.
///
/// Overridable so a run can target a mirror or a local test server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrls {
    /// Watch page base; the video id is appended as `?v=<id>`.
    pub watch_base: String,
    /// Image host base; the id and variant are appended as path segments.
    pub thumbnail_base: String,
}

impl Default for SiteUrls {
    fn default() -> Self {
        Self {
            watch_base: DEFAULT_WATCH_BASE.to_string(),
            thumbnail_base: DEFAULT_THUMBNAIL_BASE.to_string(),
        }
    }
}

impl SiteUrls {
    /// Watch page URL for a video.
    pub fn watch_url(&self, video_id: &VideoId) -> String {
        format!("{}?v={video_id}", self.watch_base.trim_end_matches('/'))
    }

    /// Maximum-resolution thumbnail URL for a video.
    pub fn thumbnail_url(&self, video_id: &VideoId) -> String {
        format!(
            "{}/{video_id}/{THUMBNAIL_VARIANT}",
            self.thumbnail_base.trim_end_matches('/')
        )
    }
}
