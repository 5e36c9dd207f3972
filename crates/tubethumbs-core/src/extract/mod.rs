//! Extraction of playlist data from fetched HTML.
//!
//! All functions here are synchronous and pure: they take already-fetched
//! text and never touch the network or the filesystem.

mod filename;
mod ids;
mod title;

pub use filename::{RESERVED_FILENAME_CHARS, sanitize_filename, sanitize_or};
pub use ids::{extract_playlist_id, extract_video_ids};
pub use title::{FALLBACK_PLAYLIST_TITLE, TITLE_SUFFIX, extract_branded_title, extract_title};

use crate::domain::Playlist;

/// Build a [`Playlist`] from its URL and the fetched page body.
pub fn parse_playlist_page(playlist_url: &str, html: &str) -> Playlist {
    Playlist {
        id: extract_playlist_id(playlist_url),
        title: extract_title(html),
        video_ids: extract_video_ids(html),
    }
}
