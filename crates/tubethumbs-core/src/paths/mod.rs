//! Output folder layout.
//!
//! Thumbnails land in `<root folder>/<sanitized playlist title>/`. The root
//! folder is relative to the working directory unless configured otherwise.

mod ensure;
mod error;

use std::path::{Path, PathBuf};

pub use ensure::ensure_directory;
pub use error::PathError;

use crate::domain::Playlist;
use crate::extract::{FALLBACK_PLAYLIST_TITLE, sanitize_or};

/// Default root folder for all playlists.
pub const DEFAULT_ROOT_FOLDER: &str = "Youtube Thumbnails";

/// Folder for one playlist under `root`.
///
/// The title is sanitized; if nothing usable remains, the playlist id is
/// used, then [`FALLBACK_PLAYLIST_TITLE`]. The result is always a single
/// component directly below `root`.
pub fn playlist_folder(root: &Path, playlist: &Playlist) -> PathBuf {
    let name = [
        Some(sanitize_or(&playlist.title, "")),
        playlist.id.as_deref().map(|id| sanitize_or(id, "")),
    ]
    .into_iter()
    .flatten()
    .find(|name| is_usable_component(name))
    .unwrap_or_else(|| FALLBACK_PLAYLIST_TITLE.to_string());
    root.join(name)
}

/// `.` and `..` would resolve to the root or its parent.
fn is_usable_component(name: &str) -> bool {
    !matches!(name.trim(), "" | "." | "..")
}
