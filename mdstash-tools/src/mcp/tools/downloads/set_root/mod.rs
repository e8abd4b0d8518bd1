//! Download root configuration tool for MCP operations

use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use async_trait::async_trait;
use mdstash_downloads::DownloadsConfig;
use rmcp::model::CallToolResult;
use rmcp::ErrorData as McpError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Probe filename used to verify the target directory is writable.
const WRITE_PROBE_FILE_NAME: &str = ".mdstash-write-test";

/// Request structure for the set-root tool
#[derive(Debug, Deserialize)]
pub struct SetRootRequest {
    /// Absolute path of the new downloads root
    pub directory: String,
}

/// Tool for changing the root download directory
#[derive(Default)]
pub struct DownloadsSetRootTool;

impl DownloadsSetRootTool {
    /// Creates a new instance of the DownloadsSetRootTool
    pub fn new() -> Self {
        Self
    }
}

/// Check that a directory accepts writes by creating and removing a probe file.
fn probe_writable(directory: &Path) -> std::io::Result<()> {
    let probe = directory.join(WRITE_PROBE_FILE_NAME);
    fs::write(&probe, b"")?;
    fs::remove_file(&probe)
}

#[async_trait]
impl McpTool for DownloadsSetRootTool {
    fn name(&self) -> &'static str {
        "downloads_set_root"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "directory": {
                    "type": "string",
                    "description": "Absolute path of an existing, writable directory to use as the downloads root"
                }
            },
            "required": ["directory"],
            "additionalProperties": false
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request: SetRootRequest = BaseToolImpl::parse_arguments(arguments)?;
        let directory = Path::new(&request.directory);

        // Validation failures leave the configuration unchanged.
        if !directory.is_absolute() {
            return Ok(BaseToolImpl::create_error_response(
                format!("Directory '{}' is not an absolute path", directory.display()),
                None,
            ));
        }

        if !directory.is_dir() {
            return Ok(BaseToolImpl::create_error_response(
                format!("Directory '{}' does not exist", directory.display()),
                None,
            ));
        }

        if let Err(e) = probe_writable(directory) {
            return Ok(BaseToolImpl::create_error_response(
                format!("Directory '{}' is not writable", directory.display()),
                Some(e.to_string()),
            ));
        }

        context
            .config_store
            .save(&DownloadsConfig::new(directory));

        tracing::info!("Download directory set to {}", directory.display());
        Ok(BaseToolImpl::create_success_response(format!(
            "Download directory set to {}",
            directory.display()
        )))
    }
}
