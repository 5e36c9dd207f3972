//! Core domain types, page extraction and port definitions for tubethumbs.
//!
//! This crate contains no networking code. Adapters (`tubethumbs-http`)
//! implement the [`PageFetcher`] port; the download crate drives it.
//!
//! - `domain` - playlist and video identifiers
//! - `extract` - pure functions over fetched HTML (video ids, titles, filenames)
//! - `ports` - the page fetcher abstraction and its error type
//! - `paths` - output folder layout and directory creation
//! - `urls` - templated watch-page and thumbnail URLs
//! - `config` - run configuration and validation

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod extract;
pub mod paths;
pub mod ports;
pub mod urls;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use config::{ConfigError, DEFAULT_CONCURRENCY, DEFAULT_USER_AGENT, RunConfig};
pub use domain::{Playlist, VideoId};
pub use extract::{
    FALLBACK_PLAYLIST_TITLE, RESERVED_FILENAME_CHARS, TITLE_SUFFIX, extract_branded_title,
    extract_playlist_id, extract_title, extract_video_ids, parse_playlist_page, sanitize_filename,
    sanitize_or,
};
pub use paths::{DEFAULT_ROOT_FOLDER, PathError, ensure_directory, playlist_folder};
pub use ports::{
    FetchError, FetchResponse, FetchResult, FetcherFactory, PageFetcher, RequestHeaders,
};
pub use urls::SiteUrls;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
