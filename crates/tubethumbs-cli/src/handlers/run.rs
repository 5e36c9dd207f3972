//! Download every thumbnail of one playlist.

use tubethumbs_download::RunSummary;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{ProgressDisplay, render_json, render_text};

/// Run the playlist download and print the summary on stdout.
///
/// Succeeds whenever the run completes, whatever the per-video outcome.
pub async fn execute(ctx: &CliContext, playlist_url: &str) -> Result<RunSummary, CliError> {
    let display = ctx
        .output
        .progress
        .then(|| ProgressDisplay::spawn(ctx.runner.subscribe_progress()));

    let result = ctx.runner.run(playlist_url).await;

    if let Some(display) = display {
        display.finish(result.as_ref().ok());
    }

    let summary = result?;
    println!("{}", format_summary(ctx, &summary)?);
    Ok(summary)
}

fn format_summary(ctx: &CliContext, summary: &RunSummary) -> Result<String, CliError> {
    if ctx.output.json {
        Ok(render_json(summary)?)
    } else {
        Ok(render_text(summary))
    }
}
