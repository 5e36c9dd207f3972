//! Playlist and video domain types.
//!
//! Pure data types with no I/O. A [`Playlist`] is derived once per run from
//! a fetched page and never persisted.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a single video (the `v=` value of a watch URL).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VideoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A playlist as seen on a single page fetch.
///
/// The video set has set semantics: duplicates on the page collapse into
/// one entry. `BTreeSet` keeps iteration sorted, which makes dispatch order
/// reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// The `list=` identifier from the playlist URL, when present.
    pub id: Option<String>,
    /// Display title with the site branding removed. May contain
    /// characters that are not valid in file names.
    pub title: String,
    /// Unique video identifiers found on the page.
    pub video_ids: BTreeSet<VideoId>,
}

impl Playlist {
    /// Number of unique videos found.
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// True when the page listed no videos.
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}
