//! Page title extraction.
//!
//! Both playlist and watch pages carry the site branding as a trailing
//! suffix of the `<title>` element. The document is parsed with `scraper`
//! so character references such as `&amp;` come back decoded.

use scraper::{Html, Selector};

/// Branding suffix appended to every page title.
pub const TITLE_SUFFIX: &str = " - YouTube";

/// Title used when a playlist page has no `<title>` element.
pub const FALLBACK_PLAYLIST_TITLE: &str = "YouTube_Playlist";

/// Text content of the first `<title>` element, if any.
fn title_text(html: &str) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// Playlist page title with the branding suffix and surrounding whitespace
/// removed.
///
/// Returns [`FALLBACK_PLAYLIST_TITLE`] when the page has no title element.
pub fn extract_title(html: &str) -> String {
    title_text(html).map_or_else(
        || FALLBACK_PLAYLIST_TITLE.to_string(),
        |text| {
            let text = text.trim_end();
            text.strip_suffix(TITLE_SUFFIX).unwrap_or(text).trim().to_string()
        },
    )
}

/// Watch page title, anchored on the branding suffix.
///
/// Returns `None` when there is no title element or the title does not end
/// with [`TITLE_SUFFIX`] (error and consent pages use a bare site name).
pub fn extract_branded_title(html: &str) -> Option<String> {
    let text = title_text(html)?;
    text.trim_end()
        .strip_suffix(TITLE_SUFFIX)
        .map(|title| title.trim().to_string())
}
