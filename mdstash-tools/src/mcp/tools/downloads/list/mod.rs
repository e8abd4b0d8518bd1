//! Download listing tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use mdstash_downloads::resolve_listing_directory;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde::Deserialize;
use std::fs;

/// Request structure for the list tool
#[derive(Debug, Default, Deserialize)]
pub struct ListRequest {
    /// Optional subdirectory under the downloads root to list
    pub subdirectory: Option<String>,
}

/// Tool for listing saved artifacts
#[derive(Default)]
pub struct DownloadsListTool;

impl DownloadsListTool {
    /// Creates a new instance of the DownloadsListTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DownloadsListTool {
    fn name(&self) -> &'static str {
        "downloads_list"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "subdirectory": {
                    "type": "string",
                    "description": "Subdirectory under the downloads root to list (optional, defaults to the root)"
                }
            },
            "additionalProperties": false
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: ListRequest = BaseToolImpl::parse_arguments(arguments)?;

        let loaded = context.config_store.load();
        let directory = match resolve_listing_directory(
            &loaded.config.download_directory,
            request.subdirectory.as_deref(),
        ) {
            Ok(dir) => dir,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    "Failed to resolve listing directory",
                    Some(e.to_string()),
                ))
            }
        };

        // A missing directory is a reportable failure, never an empty list.
        if !directory.is_dir() {
            return Ok(BaseToolImpl::create_error_response(
                format!("Directory '{}' does not exist", directory.display()),
                None,
            ));
        }

        let entries = match fs::read_dir(&directory) {
            Ok(entries) => entries,
            Err(e) => {
                return Ok(BaseToolImpl::create_error_response(
                    format!("Failed to list directory '{}'", directory.display()),
                    Some(e.to_string()),
                ))
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();

        tracing::debug!("Listed {} entries in {}", names.len(), directory.display());
        Ok(BaseToolImpl::create_success_response(names.join("\n")))
    }
}
