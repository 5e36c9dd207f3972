//! Progress bar fed by the runner's progress channel.

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tubethumbs_download::{ProgressUpdate, RunSummary};

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} thumbnails {msg}",
    )
    .map_or_else(|_| ProgressStyle::default_bar(), |style| style.progress_chars("█▓░"))
}

/// A terminal progress bar that follows [`ProgressUpdate`]s.
pub struct ProgressDisplay {
    bar: ProgressBar,
    task: JoinHandle<()>,
}

impl ProgressDisplay {
    /// Draw a bar on stderr.
    pub fn spawn(updates: watch::Receiver<ProgressUpdate>) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(bar_style());
        Self::with_bar(bar, updates)
    }

    /// Follow `updates` with an existing bar.
    pub fn with_bar(bar: ProgressBar, mut updates: watch::Receiver<ProgressUpdate>) -> Self {
        let handle = bar.clone();
        let task = tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                let update = updates.borrow_and_update().clone();
                apply(&handle, &update);
            }
        });
        Self { bar, task }
    }

    /// Stop following updates and leave the final state on screen.
    pub fn finish(self, summary: Option<&RunSummary>) {
        self.task.abort();
        match summary {
            Some(summary) if summary.total > 0 => {
                self.bar.set_length(summary.total as u64);
                self.bar.set_position((summary.succeeded + summary.failed) as u64);
                self.bar.finish_with_message(failed_message(summary.failed));
            }
            _ => self.bar.finish_and_clear(),
        }
    }

    pub const fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

fn apply(bar: &ProgressBar, update: &ProgressUpdate) {
    bar.set_length(update.total as u64);
    bar.set_position(update.completed as u64);
    bar.set_message(failed_message(update.failed));
}

fn failed_message(failed: usize) -> String {
    if failed == 0 {
        String::new()
    } else {
        format!("({failed} failed)")
    }
}
