//! Progress log throttling.

use std::time::{Duration, Instant};

use super::ProgressUpdate;

/// Default minimum interval between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// Decides which progress snapshots get a log line.
///
/// The snapshot that finishes a run is always logged.
#[derive(Debug)]
pub struct ProgressThrottle {
    last_logged: Option<Instant>,
    interval: Duration,
}

impl ProgressThrottle {
    pub const fn new(interval: Duration) -> Self {
        Self {
            last_logged: None,
            interval,
        }
    }

    /// Whether `update` should be logged now.
    pub fn admit(&mut self, update: &ProgressUpdate) -> bool {
        self.admit_at(update, Instant::now())
    }

    /// Whether `update` should be logged at `now`; an admitted update
    /// restarts the interval.
    pub fn admit_at(&mut self, update: &ProgressUpdate, now: Instant) -> bool {
        let due = self
            .last_logged
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if due || update.is_finished() {
            self.last_logged = Some(now);
            return true;
        }
        false
    }
}

impl Default for ProgressThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRESS_INTERVAL)
    }
}
