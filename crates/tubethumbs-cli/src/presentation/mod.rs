//! Terminal output: progress bar and run summaries.

pub mod progress;
pub mod summary;

pub use progress::ProgressDisplay;
pub use summary::{render_json, render_text};
