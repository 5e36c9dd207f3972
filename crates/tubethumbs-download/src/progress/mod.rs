//! Run progress snapshots and log throttling.

mod throttle;

pub use throttle::{DEFAULT_PROGRESS_INTERVAL, ProgressThrottle};

use serde::Serialize;

/// Snapshot of a run's progress, published on a `watch` channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressUpdate {
    /// Downloads finished, successfully or not.
    pub completed: usize,
    /// Downloads that saved a file.
    pub succeeded: usize,
    /// Downloads that failed.
    pub failed: usize,
    /// Downloads dispatched in this run.
    pub total: usize,
    /// Monotonically increasing sequence number for change detection.
    pub seq: u64,
}

impl ProgressUpdate {
    /// True once every dispatched download has finished.
    pub const fn is_finished(&self) -> bool {
        self.completed >= self.total
    }

    /// Downloads not yet finished.
    pub const fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}
