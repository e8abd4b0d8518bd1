//! HTTP client for the markdown rendering endpoint.
//!
//! The rendering endpoint returns a markdown rendition of any webpage whose
//! URL is appended to its base path. This client issues exactly one GET per
//! fetch with a markdown Accept header; there is no retry or backoff.

use crate::error::{ReaderError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Base URL of the rendering endpoint; the requested URL is appended verbatim.
pub const READER_BASE_URL: &str = "https://r.jina.ai/";

/// Accept header value asking the endpoint for markdown output.
pub const MARKDOWN_ACCEPT: &str = "text/markdown";

/// Request timeout applied by the underlying HTTP client.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 10;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("mdstash/", env!("CARGO_PKG_VERSION"));

/// Client for fetching markdown renderings of webpages.
#[derive(Debug, Clone)]
pub struct ReaderClient {
    client: Client,
    base_url: String,
}

impl ReaderClient {
    /// Creates a client pointed at the production rendering endpoint.
    pub fn new() -> Result<Self> {
        Self::with_base_url(READER_BASE_URL)
    }

    /// Creates a client with a custom endpoint base URL.
    ///
    /// Primarily useful for testing against a local mock server. The base
    /// must end with `/` so the requested URL can be appended directly.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ReaderError::ClientBuild)?;

        Ok(ReaderClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Base URL of the rendering endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the markdown rendering of a webpage.
    ///
    /// Validates the URL, issues one GET to `<base_url><url>` with
    /// `Accept: text/markdown`, and returns the body verbatim.
    ///
    /// # Errors
    ///
    /// * [`ReaderError::InvalidUrl`] / [`ReaderError::UnsupportedScheme`] -
    ///   the URL is malformed or not http(s)
    /// * [`ReaderError::Timeout`] / [`ReaderError::Connection`] /
    ///   [`ReaderError::Request`] - the request never completed
    /// * [`ReaderError::HttpStatus`] - the endpoint answered with a
    ///   non-success status
    #[instrument(skip(self))]
    pub async fn fetch_markdown(&self, url: &str) -> Result<String> {
        validate_source_url(url)?;

        let reader_url = format!("{}{}", self.base_url, url);
        debug!("Requesting markdown rendering from {}", reader_url);

        let response = self
            .client
            .get(&reader_url)
            .header("Accept", MARKDOWN_ACCEPT)
            .send()
            .await
            .map_err(|e| map_reqwest_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReaderError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ReaderError::Body {
            url: url.to_string(),
            source: e,
        })?;

        info!("Fetched markdown rendering of {} ({} chars)", url, body.len());
        Ok(body)
    }
}

/// Validates format and scheme of a URL to be rendered.
pub fn validate_source_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| ReaderError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(ReaderError::UnsupportedScheme {
            url: url.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

/// Maps reqwest errors to ReaderError variants.
fn map_reqwest_error(url: &str, error: reqwest::Error) -> ReaderError {
    if error.is_timeout() {
        return ReaderError::Timeout {
            url: url.to_string(),
        };
    }

    if error.is_connect() {
        return ReaderError::Connection {
            url: url.to_string(),
            message: error.to_string(),
        };
    }

    ReaderError::Request {
        url: url.to_string(),
        source: error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_markdown_success() {
        let mock_server = MockServer::start().await;
        let expected_body = "# Example\n\nRendered page.";

        Mock::given(method("GET"))
            .and(path("/https://example.com/a"))
            .and(header("Accept", MARKDOWN_ACCEPT))
            .respond_with(ResponseTemplate::new(200).set_body_string(expected_body))
            .mount(&mock_server)
            .await;

        let client = ReaderClient::with_base_url(format!("{}/", mock_server.uri())).unwrap();
        let body = client.fetch_markdown("https://example.com/a").await.unwrap();

        assert_eq!(body, expected_body);
    }

    #[tokio::test]
    async fn test_fetch_markdown_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = ReaderClient::with_base_url(format!("{}/", mock_server.uri())).unwrap();
        let result = client.fetch_markdown("https://example.com/missing").await;

        match result.unwrap_err() {
            ReaderError::HttpStatus { status, url } => {
                assert_eq!(status, 404);
                assert_eq!(url, "https://example.com/missing");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_markdown_rejects_malformed_url() {
        let client = ReaderClient::new().unwrap();
        let result = client.fetch_markdown("not a url").await;

        assert!(matches!(result, Err(ReaderError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_fetch_markdown_rejects_non_http_scheme() {
        let client = ReaderClient::new().unwrap();
        let result = client.fetch_markdown("ftp://example.com/file").await;

        match result.unwrap_err() {
            ReaderError::UnsupportedScheme { scheme, .. } => assert_eq!(scheme, "ftp"),
            other => panic!("expected UnsupportedScheme, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_markdown_connection_failure() {
        // Nothing listens on port 1.
        let client = ReaderClient::with_base_url("http://127.0.0.1:1/").unwrap();
        let result = client.fetch_markdown("https://example.com/a").await;

        assert!(matches!(result, Err(ReaderError::Connection { .. })));
    }

    #[test]
    fn test_validate_source_url_accepts_http_and_https() {
        assert!(validate_source_url("http://example.com").is_ok());
        assert!(validate_source_url("https://example.com/a?q=1").is_ok());
    }

    #[test]
    fn test_default_base_url_ends_with_slash() {
        assert!(READER_BASE_URL.ends_with('/'));
        let client = ReaderClient::new().unwrap();
        assert_eq!(client.base_url(), READER_BASE_URL);
    }

    #[test]
    fn test_custom_base_url_is_reported() {
        let client = ReaderClient::with_base_url("http://127.0.0.1:9/").unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/");
    }
}
