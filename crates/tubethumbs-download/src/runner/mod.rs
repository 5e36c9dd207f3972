//! Playlist orchestration.
//!
//! A run fetches the playlist page, creates the playlist folder and drains
//! one job per video through a fixed pool of workers. Each worker lazily
//! creates its own fetcher and keeps it for every job it takes. The run
//! returns only after every worker has exited.

mod state;
mod summary;

use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinSet;
use tubethumbs_core::{
    FALLBACK_PLAYLIST_TITLE, FetchResult, FetcherFactory, PageFetcher, Playlist, RequestHeaders,
    RunConfig, ensure_directory, extract_playlist_id, parse_playlist_page, playlist_folder,
};

use crate::error::{RunError, ThumbnailError};
use crate::progress::{DEFAULT_PROGRESS_INTERVAL, ProgressThrottle, ProgressUpdate};
use crate::worker::{ThumbnailJob, WorkerDeps, download_thumbnail};

use state::{RunState, publish_start};
pub use summary::RunSummary;

/// Downloads every thumbnail of a playlist.
pub struct PlaylistRunner {
    factory: Arc<dyn FetcherFactory>,
    config: RunConfig,
    progress_tx: Arc<watch::Sender<ProgressUpdate>>,
    progress_interval: Duration,
}

impl PlaylistRunner {
    pub fn new(factory: Arc<dyn FetcherFactory>, config: RunConfig) -> Self {
        let (progress_tx, _) = watch::channel(ProgressUpdate::default());
        Self {
            factory,
            config,
            progress_tx: Arc::new(progress_tx),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Override the worker count from the configuration.
    #[must_use]
    pub const fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Minimum interval between progress log lines.
    #[must_use]
    pub const fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    pub const fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Receive a [`ProgressUpdate`] after every finished download.
    pub fn subscribe_progress(&self) -> watch::Receiver<ProgressUpdate> {
        self.progress_tx.subscribe()
    }

    /// Download the thumbnails of the playlist at `playlist_url`.
    ///
    /// Per-video failures are logged and counted, never returned. An
    /// unreachable playlist page counts as a playlist without videos.
    pub async fn run(&self, playlist_url: &str) -> Result<RunSummary, RunError> {
        self.config.validate()?;

        let deps = WorkerDeps {
            urls: self.config.urls.clone(),
            headers: self.config.headers(),
        };

        let playlist = {
            let fetcher = self.factory.create()?;
            fetch_playlist(fetcher.as_ref(), playlist_url, &deps.headers).await
        };

        if playlist.id.is_none() {
            tracing::warn!(url = playlist_url, "No playlist id in URL");
        }

        if playlist.is_empty() {
            tracing::info!(url = playlist_url, "No videos found in the playlist");
            publish_start(&self.progress_tx, 0);
            return Ok(RunSummary::empty(playlist.id, playlist.title));
        }

        let folder = playlist_folder(&self.config.root_folder, &playlist);
        ensure_directory(&folder)?;

        tracing::info!(
            title = %playlist.title,
            folder = %folder.display(),
            videos = playlist.len(),
            "Found {} videos",
            playlist.len()
        );

        let jobs: VecDeque<ThumbnailJob> = playlist
            .video_ids
            .iter()
            .map(|id| ThumbnailJob::new(id.clone(), folder.clone()))
            .collect();
        let state = Arc::new(RunState::new(
            jobs,
            Arc::clone(&self.progress_tx),
            ProgressThrottle::new(self.progress_interval),
        ));

        self.dispatch(&state, &deps).await;

        let total = state.total();
        let succeeded = state.succeeded();
        let failed = total - succeeded;
        tracing::info!(succeeded, failed, folder = %folder.display(), "Run complete");

        Ok(RunSummary {
            playlist_id: playlist.id,
            playlist_title: playlist.title,
            folder: Some(folder),
            total,
            succeeded,
            failed,
        })
    }

    /// Spawn `min(concurrency, total)` workers and wait for all of them.
    async fn dispatch(&self, state: &Arc<RunState>, deps: &WorkerDeps) {
        let workers = self.config.concurrency.min(state.total());
        tracing::debug!(workers, "Starting download workers");

        let mut set = JoinSet::new();
        for worker in 0..workers {
            set.spawn(worker_loop(
                worker,
                Arc::clone(&self.factory),
                Arc::clone(state),
                deps.clone(),
            ));
        }

        while let Some(result) = set.join_next().await {
            if let Err(e) = result {
                tracing::error!(error = %e, "Download worker panicked");
            }
        }
    }
}

/// Fetch and parse the playlist page.
///
/// Transport failures and non-200 statuses are logged and yield an empty
/// playlist titled [`FALLBACK_PLAYLIST_TITLE`].
async fn fetch_playlist(fetcher: &dyn PageFetcher, url: &str, headers: &RequestHeaders) -> Playlist {
    match fetcher.fetch(url, headers).await {
        Ok(response) if response.is_ok() => parse_playlist_page(url, &response.text()),
        Ok(response) => {
            tracing::error!(url, status = response.status, "Failed to fetch playlist page");
            unavailable_playlist(url)
        }
        Err(e) => {
            tracing::error!(url, error = %e, "Failed to fetch playlist page");
            unavailable_playlist(url)
        }
    }
}

fn unavailable_playlist(url: &str) -> Playlist {
    Playlist {
        id: extract_playlist_id(url),
        title: FALLBACK_PLAYLIST_TITLE.to_string(),
        video_ids: BTreeSet::new(),
    }
}

/// Drain the queue with one lazily created fetcher.
async fn worker_loop(
    worker: usize,
    factory: Arc<dyn FetcherFactory>,
    state: Arc<RunState>,
    deps: WorkerDeps,
) {
    let mut fetcher = None;

    while let Some(job) = state.next_job().await {
        let outcome = match worker_fetcher(&mut fetcher, factory.as_ref()) {
            Ok(fetcher) => download_thumbnail(fetcher.as_ref(), &job, &deps).await,
            Err(source) => {
                tracing::error!(worker, video_id = %job.video_id, error = %source, "No fetcher available");
                Err(ThumbnailError::Fetcher {
                    video_id: job.video_id.clone(),
                    source,
                })
            }
        };
        state.record(outcome.is_ok());
    }

    tracing::debug!(worker, "Worker finished");
}

/// The worker's fetcher, created on first use.
///
/// A failed creation is retried on the next job.
fn worker_fetcher(
    slot: &mut Option<Arc<dyn PageFetcher>>,
    factory: &dyn FetcherFactory,
) -> FetchResult<Arc<dyn PageFetcher>> {
    let fetcher = match slot.take() {
        Some(fetcher) => fetcher,
        None => factory.create()?,
    };
    *slot = Some(Arc::clone(&fetcher));
    Ok(fetcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tubethumbs_core::testing::{FakeFetcher, FakeFetcherFactory};
    use tubethumbs_core::{ConfigError, FetchError, PathError};

    const PLAYLIST_URL: &str = "https://www.youtube.com/playlist?list=PL42";

    fn runner(factory: Arc<FakeFetcherFactory>, root: &std::path::Path) -> PlaylistRunner {
        PlaylistRunner::new(factory, RunConfig::new().with_root_folder(root))
    }

    #[tokio::test]
    async fn invalid_concurrency_is_rejected_before_fetching() {
        let dir = TempDir::new().unwrap();
        let factory = Arc::new(FakeFetcherFactory::new(FakeFetcher::new()));

        let err = runner(Arc::clone(&factory), dir.path())
            .with_concurrency(0)
            .run(PLAYLIST_URL)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RunError::Config(ConfigError::InvalidConcurrency(0))
        ));
        assert_eq!(factory.created(), 0);
    }

    #[tokio::test]
    async fn factory_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let factory = Arc::new(FakeFetcherFactory::failing("no tls"));

        let err = runner(factory, dir.path())
            .run(PLAYLIST_URL)
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Fetcher(FetchError::ClientInit { .. })));
    }

    #[tokio::test]
    async fn unreachable_playlist_counts_as_empty() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("out");
        let fake = FakeFetcher::new().with_transport_error("playlist?list=", "dns failure");
        let factory = Arc::new(FakeFetcherFactory::new(fake));

        let summary = runner(Arc::clone(&factory), &root)
            .run(PLAYLIST_URL)
            .await
            .unwrap();

        assert!(summary.is_empty());
        assert_eq!(summary.playlist_title, FALLBACK_PLAYLIST_TITLE);
        assert_eq!(summary.playlist_id.as_deref(), Some("PL42"));
        assert!(!root.exists());
        assert_eq!(factory.created(), 1);
    }

    #[tokio::test]
    async fn playlist_status_error_counts_as_empty() {
        let dir = TempDir::new().unwrap();
        let fake = FakeFetcher::new().with_response(
            "playlist?list=",
            500,
            b"<title>Broken - YouTube</title> watch?v=abc".to_vec(),
        );
        let factory = Arc::new(FakeFetcherFactory::new(fake));

        let summary = runner(Arc::clone(&factory), dir.path())
            .run(PLAYLIST_URL)
            .await
            .unwrap();

        assert!(summary.is_empty());
        assert_eq!(summary.playlist_title, FALLBACK_PLAYLIST_TITLE);
        assert_eq!(factory.fetcher().request_count("watch?v="), 0);
    }

    #[tokio::test]
    async fn folder_blocked_by_file_is_path_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Mix"), b"not a dir").unwrap();

        let fake = FakeFetcher::new().with_page(
            "playlist?list=",
            "<title>Mix - YouTube</title> /watch?v=abc",
        );
        let factory = Arc::new(FakeFetcherFactory::new(fake));

        let err = runner(Arc::clone(&factory), dir.path())
            .run(PLAYLIST_URL)
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Path(PathError::NotADirectory(_))));
        assert_eq!(factory.fetcher().request_count("watch?v="), 0);
    }

    #[tokio::test]
    async fn single_worker_creates_one_fetcher() {
        let dir = TempDir::new().unwrap();
        let fake = FakeFetcher::new()
            .with_page(
                "playlist?list=",
                "<title>Mix - YouTube</title> /watch?v=a /watch?v=b /watch?v=c",
            )
            .with_page("watch?v=", "<title>Song - YouTube</title>")
            .with_response("img.", 200, b"jpg".to_vec());
        let factory = Arc::new(FakeFetcherFactory::new(fake));

        let summary = runner(Arc::clone(&factory), dir.path())
            .with_concurrency(1)
            .run(PLAYLIST_URL)
            .await
            .unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 3);
        // One for the playlist page, one for the only worker.
        assert_eq!(factory.created(), 2);
    }

    #[tokio::test]
    async fn workers_never_exceed_job_count() {
        let dir = TempDir::new().unwrap();
        let fake = FakeFetcher::new()
            .with_page("playlist?list=", "<title>Mix - YouTube</title> /watch?v=a /watch?v=b")
            .with_page("watch?v=", "<title>Song - YouTube</title>")
            .with_response("img.", 200, b"jpg".to_vec());
        let factory = Arc::new(FakeFetcherFactory::new(fake));

        runner(Arc::clone(&factory), dir.path())
            .with_concurrency(8)
            .run(PLAYLIST_URL)
            .await
            .unwrap();

        assert!(factory.created() <= 3);
    }

    #[tokio::test]
    async fn progress_reaches_total() {
        let dir = TempDir::new().unwrap();
        let fake = FakeFetcher::new()
            .with_page("playlist?list=", "<title>Mix - YouTube</title> /watch?v=a /watch?v=b")
            .with_page("watch?v=a", "<title>A - YouTube</title>")
            .with_response("img.", 200, b"jpg".to_vec());
        let factory = Arc::new(FakeFetcherFactory::new(fake));

        let runner = runner(factory, dir.path());
        let progress = runner.subscribe_progress();
        let summary = runner.run(PLAYLIST_URL).await.unwrap();

        let last = progress.borrow().clone();
        assert!(last.is_finished());
        assert_eq!(last.total, 2);
        assert_eq!(last.succeeded, 1);
        assert_eq!(last.failed, 1);
        assert_eq!(summary.failed, 1);
        // Start snapshot plus one per finished download.
        assert_eq!(last.seq, 3);
    }

    #[test]
    fn worker_fetcher_is_created_once() {
        let factory = FakeFetcherFactory::new(FakeFetcher::new());
        let mut slot = None;

        let first = worker_fetcher(&mut slot, &factory).unwrap();
        let second = worker_fetcher(&mut slot, &factory).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(factory.created(), 1);
    }

    #[test]
    fn worker_fetcher_failure_leaves_slot_empty() {
        let factory = FakeFetcherFactory::failing("boom");
        let mut slot = None;

        assert!(worker_fetcher(&mut slot, &factory).is_err());
        assert!(slot.is_none());
    }
}
