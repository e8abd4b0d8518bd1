//! Subdirectory creation tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use mdstash_downloads::resolve_subdirectory_path;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde::Deserialize;

/// Request structure for the create-dir tool
#[derive(Debug, Deserialize)]
pub struct CreateDirRequest {
    /// Name of the subdirectory to create under the downloads root
    pub name: String,
}

/// Tool for creating a subdirectory under the downloads root
#[derive(Default)]
pub struct DownloadsCreateDirTool;

impl DownloadsCreateDirTool {
    /// Creates a new instance of the DownloadsCreateDirTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DownloadsCreateDirTool {
    fn name(&self) -> &'static str {
        "downloads_create_dir"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the subdirectory to create under the downloads root"
                }
            },
            "required": ["name"],
            "additionalProperties": false
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: CreateDirRequest = BaseToolImpl::parse_arguments(arguments)?;

        let loaded = context.config_store.load();
        match resolve_subdirectory_path(&loaded.config.download_directory, &request.name) {
            Ok(path) => {
                tracing::info!("Created directory {}", path.display());
                Ok(BaseToolImpl::create_success_response(format!(
                    "Created directory {}",
                    path.display()
                )))
            }
            Err(e) => Ok(BaseToolImpl::create_error_response(
                format!("Failed to create directory '{}'", request.name),
                Some(e.to_string()),
            )),
        }
    }
}
