//! Download fetch tool for MCP operations
//!
//! Fetches a markdown rendering of a webpage through the rendering endpoint
//! and saves it under the configured downloads root.

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use mdstash_downloads::resolve_download_path;
use mdstash_reader::validate_source_url;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde::Deserialize;
use std::fs;

/// Request structure for the fetch tool
#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    /// URL of the webpage to fetch
    pub url: String,
    /// Optional subdirectory under the downloads root to save into
    pub subdirectory: Option<String>,
}

/// Tool for fetching a webpage as markdown and saving it locally
#[derive(Default)]
pub struct DownloadsFetchTool;

impl DownloadsFetchTool {
    /// Creates a new instance of the DownloadsFetchTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DownloadsFetchTool {
    fn name(&self) -> &'static str {
        "downloads_fetch"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "format": "uri",
                    "description": "The URL to fetch (must be a valid HTTP/HTTPS URL)"
                },
                "subdirectory": {
                    "type": "string",
                    "description": "Subdirectory under the downloads root to save into (optional, created if missing)"
                }
            },
            "required": ["url"],
            "additionalProperties": false
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: FetchRequest = BaseToolImpl::parse_arguments(arguments)?;

        // Malformed URLs are invalid input, rejected before any I/O.
        validate_source_url(&request.url)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        tracing::debug!("Fetching markdown rendering of {}", request.url);

        let loaded = context.config_store.load();
        let target = match resolve_download_path(
            &loaded.config.download_directory,
            &request.url,
            request.subdirectory.as_deref(),
        ) {
            Ok(path) => path,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    "Failed to resolve download path",
                    Some(e.to_string()),
                ))
            }
        };

        let body = match context.reader_client.fetch_markdown(&request.url).await {
            Ok(body) => body,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    "Failed to fetch markdown rendering",
                    Some(e.to_string()),
                ))
            }
        };

        if let Err(e) = fs::write(&target, &body) {
            return Ok(BaseToolImpl::create_error_response(
                format!("Failed to write artifact '{}'", target.display()),
                Some(e.to_string()),
            ));
        }

        let filename = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let directory = target
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        tracing::info!("Saved {} to {}", filename, directory);
        Ok(BaseToolImpl::create_success_response(format!(
            "Saved {filename} to {directory}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::tools::downloads::test_support::{
        response_text, test_context, test_context_with_reader,
    };
    use mdstash_downloads::artifact_filename;
    use mdstash_reader::ReaderClient;
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(url: &str, subdirectory: Option<&str>) -> serde_json::Map<String, serde_json::Value> {
        let mut map = serde_json::Map::new();
        map.insert("url".to_string(), serde_json::json!(url));
        if let Some(sub) = subdirectory {
            map.insert("subdirectory".to_string(), serde_json::json!(sub));
        }
        map
    }

    async fn mock_reader(body: &str) -> (MockServer, ReaderClient) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
        let client = ReaderClient::with_base_url(format!("{}/", server.uri())).unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn test_fetch_saves_artifact_in_root() {
        let temp = TempDir::new().unwrap();
        let (_server, client) = mock_reader("# Example\n\nRendered page.").await;
        let context = test_context_with_reader(&temp, client);
        let tool = DownloadsFetchTool::new();

        let result = tool
            .execute(args("https://example.com/a", None), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let expected = temp
            .path()
            .join("downloads")
            .join(artifact_filename("https://example.com/a"));
        assert_eq!(
            fs::read_to_string(&expected).unwrap(),
            "# Example\n\nRendered page."
        );
        assert!(response_text(&result).contains(&artifact_filename("https://example.com/a")));
    }

    #[tokio::test]
    async fn test_fetch_saves_into_subdirectory() {
        let temp = TempDir::new().unwrap();
        let (_server, client) = mock_reader("body").await;
        let context = test_context_with_reader(&temp, client);
        let tool = DownloadsFetchTool::new();

        let result = tool
            .execute(args("https://example.com/a", Some("docs")), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let sub = temp.path().join("downloads").join("docs");
        assert!(sub.is_dir());
        assert!(sub
            .join(artifact_filename("https://example.com/a"))
            .is_file());
    }

    #[tokio::test]
    async fn test_fetch_missing_url_is_invalid_params() {
        let temp = TempDir::new().unwrap();
        let context = test_context(&temp);
        let tool = DownloadsFetchTool::new();

        let result = tool.execute(serde_json::Map::new(), &context).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_malformed_url_is_invalid_params() {
        let temp = TempDir::new().unwrap();
        let context = test_context(&temp);
        let tool = DownloadsFetchTool::new();

        let result = tool.execute(args("not a url", None), &context).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_escaping_subdirectory_is_soft_failure() {
        let temp = TempDir::new().unwrap();
        let (_server, client) = mock_reader("body").await;
        let context = test_context_with_reader(&temp, client);
        let tool = DownloadsFetchTool::new();

        let result = tool
            .execute(args("https://example.com/a", Some("../escape")), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(!temp.path().join("escape").exists());
    }

    #[tokio::test]
    async fn test_fetch_endpoint_failure_is_soft_failure() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let client = ReaderClient::with_base_url(format!("{}/", server.uri())).unwrap();
        let context = test_context_with_reader(&temp, client);
        let tool = DownloadsFetchTool::new();

        let result = tool
            .execute(args("https://example.com/a", None), &context)
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(response_text(&result).contains("500"));
        let artifact = temp
            .path()
            .join("downloads")
            .join(artifact_filename("https://example.com/a"));
        assert!(!artifact.exists(), "no artifact on fetch failure");
    }
}
