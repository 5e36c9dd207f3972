//! Run summary formatting.

use tubethumbs_download::RunSummary;

/// Human readable summary.
pub fn render_text(summary: &RunSummary) -> String {
    let Some(folder) = &summary.folder else {
        return format!("No videos found in playlist '{}'", summary.playlist_title);
    };

    let mut out = format!(
        "Saved {}/{} thumbnails from '{}' to {}",
        summary.succeeded,
        summary.total,
        summary.playlist_title,
        folder.display()
    );
    if summary.failed > 0 {
        out.push_str(&format!(" ({} failed, see log)", summary.failed));
    }
    out
}

/// Summary as pretty-printed JSON.
pub fn render_json(summary: &RunSummary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
