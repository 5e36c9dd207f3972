//! Shared state of one run: job queue, counters and progress publication.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use tokio::sync::{Mutex, watch};

use crate::progress::{ProgressThrottle, ProgressUpdate};
use crate::worker::ThumbnailJob;

/// State shared by every worker of a run through an `Arc`.
pub(crate) struct RunState {
    queue: Mutex<VecDeque<ThumbnailJob>>,
    total: usize,
    succeeded: AtomicUsize,
    failed: AtomicUsize,
    progress_tx: Arc<watch::Sender<ProgressUpdate>>,
    throttle: StdMutex<ProgressThrottle>,
}

impl RunState {
    /// Queue `jobs` and publish a fresh progress snapshot.
    pub(crate) fn new(
        jobs: VecDeque<ThumbnailJob>,
        progress_tx: Arc<watch::Sender<ProgressUpdate>>,
        throttle: ProgressThrottle,
    ) -> Self {
        let total = jobs.len();
        publish_start(&progress_tx, total);

        Self {
            queue: Mutex::new(jobs),
            total,
            succeeded: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            progress_tx,
            throttle: StdMutex::new(throttle),
        }
    }

    /// Take the next job, or `None` once the queue is drained.
    pub(crate) async fn next_job(&self) -> Option<ThumbnailJob> {
        self.queue.lock().await.pop_front()
    }

    /// Count one finished job and publish the new snapshot.
    pub(crate) fn record(&self, success: bool) -> ProgressUpdate {
        let counter = if success {
            &self.succeeded
        } else {
            &self.failed
        };
        counter.fetch_add(1, Ordering::SeqCst);

        let mut snapshot = ProgressUpdate::default();
        self.progress_tx.send_modify(|progress| {
            progress.succeeded = self.succeeded.load(Ordering::SeqCst);
            progress.failed = self.failed.load(Ordering::SeqCst);
            progress.completed = progress.succeeded + progress.failed;
            progress.seq += 1;
            snapshot = progress.clone();
        });

        let emit = self
            .throttle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .admit(&snapshot);
        if emit {
            tracing::info!(
                completed = snapshot.completed,
                total = snapshot.total,
                failed = snapshot.failed,
                remaining = snapshot.remaining(),
                "Downloaded {}/{}",
                snapshot.completed,
                snapshot.total
            );
        }

        snapshot
    }

    pub(crate) const fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::SeqCst)
    }
}

/// Reset published progress for a run of `total` downloads.
pub(crate) fn publish_start(progress_tx: &watch::Sender<ProgressUpdate>, total: usize) {
    progress_tx.send_modify(|progress| {
        *progress = ProgressUpdate {
            total,
            seq: progress.seq + 1,
            ..ProgressUpdate::default()
        };
    });
}
