//! Download management tools for MCP operations
//!
//! This module provides the five download tools using the tool registry
//! pattern. Each tool is in its own submodule with dedicated implementation
//! and description:
//!
//! 1. **fetch**: fetch a markdown rendering of a webpage and save it
//! 2. **list**: list saved artifacts in the root or a subdirectory
//! 3. **set_root**: change the root download directory
//! 4. **get_root**: report the current root download directory
//! 5. **create_dir**: create a named subdirectory under the root
//!
//! ## Error Handling
//!
//! Missing or wrong-typed arguments are the only hard rejections
//! (`invalid_params`, raised before any I/O). Everything downstream - fetch
//! failures, missing directories, unwritable targets - is reported in-band
//! as a failed `CallToolResult` so the server keeps serving.

pub mod create_dir;
pub mod fetch;
pub mod get_root;
pub mod list;
pub mod set_root;

use crate::mcp::tool_registry::ToolRegistry;

/// Register all download tools with the registry
pub fn register_downloads_tools(registry: &mut ToolRegistry) {
    registry.register(fetch::DownloadsFetchTool::new());
    registry.register(list::DownloadsListTool::new());
    registry.register(set_root::DownloadsSetRootTool::new());
    registry.register(get_root::DownloadsGetRootTool::new());
    registry.register(create_dir::DownloadsCreateDirTool::new());
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::mcp::tool_registry::ToolContext;
    use mdstash_downloads::ConfigStore;
    use mdstash_reader::ReaderClient;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Build a tool context rooted in a temporary directory.
    ///
    /// The returned `TempDir` owns both the config directory and the default
    /// downloads root; keep it alive for the duration of the test.
    pub fn test_context(temp: &TempDir) -> ToolContext {
        test_context_with_reader(temp, ReaderClient::new().unwrap())
    }

    /// Build a tool context with an explicit reader client (mock endpoint).
    pub fn test_context_with_reader(temp: &TempDir, reader: ReaderClient) -> ToolContext {
        let store = ConfigStore::from_custom_dirs(
            temp.path().join("config"),
            temp.path().join("downloads"),
        );
        ToolContext::new(Arc::new(store), Arc::new(reader))
    }

    /// Extract the text content of a tool result.
    pub fn response_text(result: &rmcp::model::CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.raw.as_text().map(|t| t.text.clone()))
            .collect()
    }
}
