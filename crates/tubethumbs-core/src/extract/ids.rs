//! Video and playlist identifier extraction.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::VideoId;

/// `watch?v=` followed by word characters and hyphens.
static WATCH_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"watch\?v=([\w-]+)").expect("watch id pattern is valid"));

/// `list=` query parameter of a playlist URL.
static LIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"list=([\w-]+)").expect("list id pattern is valid"));

/// Collect every distinct video identifier referenced by a watch link.
///
/// Repetitions collapse; the result is sorted.
pub fn extract_video_ids(html: &str) -> BTreeSet<VideoId> {
    WATCH_ID
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| VideoId::new(m.as_str()))
        .collect()
}

/// Extract the playlist identifier from a playlist URL.
pub fn extract_playlist_id(playlist_url: &str) -> Option<String> {
    LIST_ID
        .captures(playlist_url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
