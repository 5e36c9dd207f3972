//! End-to-end runs of `PlaylistRunner` against canned pages.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;
use tubethumbs_core::testing::{FakeFetcher, FakeFetcherFactory};
use tubethumbs_core::{
    FetchResponse, FetchResult, FetcherFactory, PageFetcher, RequestHeaders, RunConfig,
};
use tubethumbs_download::PlaylistRunner;

// Silence unused dev-dependency warnings
use mockall as _;
use serde_json as _;
use tokio_test as _;

const PLAYLIST_URL: &str = "https://www.youtube.com/playlist?list=PLdemo";

fn config(root: &Path) -> RunConfig {
    RunConfig::new().with_root_folder(root.join("Youtube Thumbnails"))
}

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn playlist_with_duplicate_links_downloads_each_video_once() {
    let dir = TempDir::new().unwrap();
    let fake = FakeFetcher::new()
        .with_page(
            "playlist?list=",
            r#"<html><head><title>My Playlist - YouTube</title></head><body>
               <a href="/watch?v=abc123">first</a>
               <a href="/watch?v=abc123&index=2">first again</a>
               <a href="/watch?v=xyz789">second</a>
               </body></html>"#,
        )
        .with_page("watch?v=abc123", "<title>First Song - YouTube</title>")
        .with_page("watch?v=xyz789", "<title>Second Song - YouTube</title>")
        .with_response("/vi/abc123/", 200, b"first-bytes".to_vec())
        .with_response("/vi/xyz789/", 200, b"second-bytes".to_vec());
    let factory = Arc::new(FakeFetcherFactory::new(fake));

    let summary = PlaylistRunner::new(Arc::clone(&factory) as Arc<dyn FetcherFactory>, config(dir.path()))
        .run(PLAYLIST_URL)
        .await
        .unwrap();

    let folder = dir.path().join("Youtube Thumbnails").join("My Playlist");
    assert_eq!(summary.playlist_title, "My Playlist");
    assert_eq!(summary.playlist_id.as_deref(), Some("PLdemo"));
    assert_eq!(summary.folder.as_deref(), Some(folder.as_path()));
    assert_eq!(summary.total, 2);
    assert_eq!(summary.succeeded, 2);
    assert!(summary.all_succeeded());

    assert_eq!(files_in(&folder), vec!["First Song.jpg", "Second Song.jpg"]);
    assert_eq!(std::fs::read(folder.join("First Song.jpg")).unwrap(), b"first-bytes");

    let fetcher = factory.fetcher();
    assert_eq!(fetcher.request_count("watch?v=abc123"), 1);
    assert_eq!(fetcher.request_count("watch?v=xyz789"), 1);
    assert_eq!(fetcher.request_count("maxresdefault.jpg"), 2);
}

#[tokio::test]
async fn empty_playlist_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let fake = FakeFetcher::new().with_page("playlist?list=", "<title>Empty - YouTube</title>");
    let factory = Arc::new(FakeFetcherFactory::new(fake));

    let summary = PlaylistRunner::new(Arc::clone(&factory) as Arc<dyn FetcherFactory>, config(dir.path()))
        .run(PLAYLIST_URL)
        .await
        .unwrap();

    assert!(summary.is_empty());
    assert!(summary.folder.is_none());
    assert!(!dir.path().join("Youtube Thumbnails").exists());
    assert_eq!(factory.fetcher().requests().len(), 1);
}

#[tokio::test]
async fn reserved_characters_are_removed_from_names() {
    let dir = TempDir::new().unwrap();
    let fake = FakeFetcher::new()
        .with_page(
            "playlist?list=",
            "<title>Best of: 2024/25 - YouTube</title> /watch?v=vid1",
        )
        .with_page("watch?v=vid1", "<title>Example: Part 1 - YouTube</title>")
        .with_response("/vi/vid1/", 200, b"B".to_vec());

    let summary = PlaylistRunner::new(Arc::new(FakeFetcherFactory::new(fake)), config(dir.path()))
        .run(PLAYLIST_URL)
        .await
        .unwrap();

    let folder = dir.path().join("Youtube Thumbnails").join("Best of 202425");
    assert_eq!(summary.folder.as_deref(), Some(folder.as_path()));
    assert_eq!(std::fs::read(folder.join("Example Part 1.jpg")).unwrap(), b"B");
}

#[tokio::test]
async fn dot_dot_title_stays_inside_root_folder() {
    let dir = TempDir::new().unwrap();
    let fake = FakeFetcher::new()
        .with_page("playlist?list=", "<title>.. - YouTube</title> /watch?v=a")
        .with_page("watch?v=a", "<title>Song - YouTube</title>")
        .with_response("/vi/a/", 200, b"S".to_vec());

    let summary = PlaylistRunner::new(Arc::new(FakeFetcherFactory::new(fake)), config(dir.path()))
        .run(PLAYLIST_URL)
        .await
        .unwrap();

    let folder = dir.path().join("Youtube Thumbnails").join("PLdemo");
    assert_eq!(summary.folder.as_deref(), Some(folder.as_path()));
    assert_eq!(std::fs::read(folder.join("Song.jpg")).unwrap(), b"S");
    assert!(!dir.path().join("Song.jpg").exists());
}

#[tokio::test]
async fn failures_are_isolated_per_video() {
    let dir = TempDir::new().unwrap();
    let fake = FakeFetcher::new()
        .with_page(
            "playlist?list=",
            "<title>Mixed - YouTube</title> /watch?v=ok1 /watch?v=gone /watch?v=noimg /watch?v=ok2",
        )
        .with_response("watch?v=gone", 404, Vec::new())
        .with_page("watch?v=noimg", "<title>No Image - YouTube</title>")
        .with_transport_error("/vi/noimg/", "connection reset")
        .with_page("watch?v=ok", "<title>Fine - YouTube</title>")
        .with_response("/vi/ok", 200, b"jpg".to_vec());
    let factory = Arc::new(FakeFetcherFactory::new(fake));

    let summary = PlaylistRunner::new(Arc::clone(&factory) as Arc<dyn FetcherFactory>, config(dir.path()))
        .with_concurrency(2)
        .run(PLAYLIST_URL)
        .await
        .unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.succeeded, 2);
    assert_eq!(summary.failed, 2);
    // No image request for the video whose page was missing.
    assert_eq!(factory.fetcher().request_count("/vi/gone/"), 0);

    let folder = dir.path().join("Youtube Thumbnails").join("Mixed");
    // Both successes share a title; the later write wins.
    assert_eq!(files_in(&folder), vec!["Fine.jpg"]);
}

#[tokio::test]
async fn user_agent_is_sent_with_every_request() {
    let dir = TempDir::new().unwrap();
    let fake = FakeFetcher::new()
        .with_page("playlist?list=", "<title>UA - YouTube</title> /watch?v=a")
        .with_page("watch?v=a", "<title>A - YouTube</title>")
        .with_response("/vi/a/", 200, b"x".to_vec());
    let factory = Arc::new(FakeFetcherFactory::new(fake));

    PlaylistRunner::new(
        Arc::clone(&factory) as Arc<dyn FetcherFactory>,
        config(dir.path()).with_user_agent("tubethumbs-test/1.0"),
    )
    .run(PLAYLIST_URL)
    .await
    .unwrap();

    let requests = factory.fetcher().requests();
    assert_eq!(requests.len(), 3);
    assert!(
        requests
            .iter()
            .all(|r| r.user_agent.as_deref() == Some("tubethumbs-test/1.0"))
    );
}

/// Fetcher that tracks how many requests are in flight at once.
struct SlowFetcher {
    inner: FakeFetcher,
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

#[async_trait]
impl PageFetcher for SlowFetcher {
    async fn fetch(&self, url: &str, headers: &RequestHeaders) -> FetchResult<FetchResponse> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        let response = self.inner.fetch(url, headers).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        response
    }
}

struct SlowFactory {
    inner: FakeFetcher,
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl FetcherFactory for SlowFactory {
    fn create(&self) -> FetchResult<Arc<dyn PageFetcher>> {
        Ok(Arc::new(SlowFetcher {
            inner: self.inner.clone(),
            in_flight: Arc::clone(&self.in_flight),
            peak: Arc::clone(&self.peak),
        }))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrency_limit_bounds_in_flight_requests() {
    let dir = TempDir::new().unwrap();
    let links: String = (0..12).map(|i| format!(" /watch?v=v{i:02}")).collect();
    let inner = FakeFetcher::new()
        .with_page("playlist?list=", &format!("<title>Load - YouTube</title>{links}"))
        .with_page("watch?v=", "<title>Same - YouTube</title>")
        .with_response("/vi/", 200, b"x".to_vec());
    let peak = Arc::new(AtomicUsize::new(0));
    let factory = Arc::new(SlowFactory {
        inner: inner.clone(),
        in_flight: Arc::new(AtomicUsize::new(0)),
        peak: Arc::clone(&peak),
    });

    let summary = PlaylistRunner::new(factory, config(dir.path()))
        .with_concurrency(3)
        .run(PLAYLIST_URL)
        .await
        .unwrap();

    assert_eq!(summary.total, 12);
    assert_eq!(summary.succeeded, 12);
    assert_eq!(inner.request_count("watch?v="), 12);
    assert!(peak.load(Ordering::SeqCst) <= 3);
    assert!(peak.load(Ordering::SeqCst) >= 1);
}
