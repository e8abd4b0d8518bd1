//! Error types for the markdown rendering client.

use thiserror::Error;

/// Result type alias using ReaderError.
pub type Result<T> = std::result::Result<T, ReaderError>;

/// Errors that can occur while fetching a markdown rendering.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The requested URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The requested URL uses a scheme other than http or https.
    #[error("unsupported URL scheme '{scheme}' in '{url}'")]
    UnsupportedScheme { url: String, scheme: String },

    /// The request timed out.
    #[error("request for '{url}' timed out")]
    Timeout { url: String },

    /// The rendering endpoint could not be reached.
    #[error("failed to connect while fetching '{url}': {message}")]
    Connection { url: String, message: String },

    /// The rendering endpoint answered with a non-success status.
    #[error("rendering endpoint returned HTTP {status} for '{url}'")]
    HttpStatus { url: String, status: u16 },

    /// The response body could not be read.
    #[error("failed to read response body for '{url}': {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request failed for another reqwest-level reason.
    #[error("request for '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
