//! Artifact naming for downloaded documents.
//!
//! A URL is reduced to a filesystem-safe stem and combined with the UTC
//! calendar date to form the artifact filename. The transform is lossy and
//! deterministic: URLs differing only in punctuation map to the same stem,
//! and repeated downloads of one URL on one day overwrite the same file.
//! Downloads on different days produce distinct files.

use chrono::{NaiveDate, Utc};

/// Date stamp format used in artifact filenames.
const DATE_FORMAT: &str = "%Y%m%d";

/// Reduce a URL to a filesystem-safe filename stem.
///
/// Strips one leading `http://` or `https://` scheme, replaces every
/// character outside the ASCII alphanumeric set with a dash, and lowercases
/// the result. Consecutive dashes are not collapsed and no length cap is
/// applied.
///
/// # Examples
///
/// ```
/// use mdstash_downloads::sanitize_url;
///
/// assert_eq!(sanitize_url("https://example.com/a"), "example-com-a");
/// assert_eq!(sanitize_url("Example.COM"), "example-com");
/// ```
pub fn sanitize_url(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);

    stripped
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Build the artifact filename for a URL using today's UTC calendar date.
///
/// Returns `<sanitized-url>-<YYYYMMDD>.md`.
pub fn artifact_filename(url: &str) -> String {
    artifact_filename_on(url, Utc::now().date_naive())
}

/// Build the artifact filename for a URL on an explicit calendar date.
///
/// [`artifact_filename`] delegates here with the current UTC date; tests pin
/// a date to get stable names.
pub fn artifact_filename_on(url: &str, date: NaiveDate) -> String {
    format!("{}-{}.md", sanitize_url(url), date.format(DATE_FORMAT))
}
