//! HTTP client for the markdown rendering endpoint.
//!
//! mdstash does not convert webpages itself; it asks a rendering endpoint
//! for a markdown rendition by appending the page URL to a fixed base URL
//! and requesting a markdown content type. This crate wraps that single
//! outbound call: URL validation, the GET itself, status handling, and
//! error mapping. Retry and caching are out of scope.
//!
//! # Example
//!
//! ```no_run
//! use mdstash_reader::ReaderClient;
//!
//! # async fn demo() -> Result<(), mdstash_reader::ReaderError> {
//! let client = ReaderClient::new()?;
//! let markdown = client.fetch_markdown("https://example.com/a").await?;
//! println!("{markdown}");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

// Re-export main types
pub use client::{validate_source_url, ReaderClient, MARKDOWN_ACCEPT, READER_BASE_URL};
pub use error::{ReaderError, Result};
