//! Filesystem-safe names.

/// Characters that are reserved in file names on at least one common platform.
pub const RESERVED_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Remove every reserved character from `text`.
///
/// Nothing is substituted, truncated or trimmed, and an input made only of
/// reserved characters becomes an empty string. Use [`sanitize_or`] when an
/// empty name is not acceptable.
pub fn sanitize_filename(text: &str) -> String {
    text.chars()
        .filter(|c| !RESERVED_FILENAME_CHARS.contains(c))
        .collect()
}

/// Sanitize `text`, falling back to the sanitized `fallback` when nothing
/// usable remains.
pub fn sanitize_or(text: &str, fallback: &str) -> String {
    let sanitized = sanitize_filename(text);
    if sanitized.trim().is_empty() {
        sanitize_filename(fallback)
    } else {
        sanitized
    }
}
