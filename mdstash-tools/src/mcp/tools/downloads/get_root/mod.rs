//! Download root reporting tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use mdstash_downloads::ConfigSource;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;

/// Tool for reporting the current root download directory
#[derive(Default)]
pub struct DownloadsGetRootTool;

impl DownloadsGetRootTool {
    /// Creates a new instance of the DownloadsGetRootTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DownloadsGetRootTool {
    fn name(&self) -> &'static str {
        "downloads_get_root"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false
        })
    }

    async fn execute(
        &self,
        _arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let loaded = context.config_store.load();

        if let ConfigSource::FallbackAfterError { reason } = &loaded.source {
            tracing::warn!("Reporting default download directory after load failure: {reason}");
        }

        Ok(BaseToolImpl::create_success_response(
            loaded.config.download_directory.display().to_string(),
        ))
    }
}
