//! MCP server implementation for serving the download tools

use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

use mdstash_downloads::ConfigStore;
use mdstash_reader::ReaderClient;

use super::tool_registry::{ToolContext, ToolRegistry};
use super::tools::downloads::register_downloads_tools;

/// Server instructions displayed to MCP clients
const SERVER_INSTRUCTIONS: &str =
    "Fetch markdown renderings of webpages and manage them in a local downloads directory.";

/// Create ServerCapabilities for MCP protocol
fn create_server_capabilities() -> ServerCapabilities {
    ServerCapabilities::builder().enable_tools().build()
}

/// Create Implementation information for the MCP server
fn create_server_implementation() -> Implementation {
    let mut implementation = Implementation::default();
    implementation.name = "mdstash".into();
    implementation.version = crate::VERSION.into();
    implementation.title = Some("mdstash MCP Server".into());
    implementation.website_url = Some("https://github.com/mdstash/mdstash".into());
    implementation
}

/// Build the ServerInfo handed out during the MCP handshake
fn create_server_info() -> ServerInfo {
    let mut info = ServerInfo::default();
    info.capabilities = create_server_capabilities();
    info.server_info = create_server_implementation();
    info.instructions = Some(SERVER_INSTRUCTIONS.into());
    info
}

/// MCP server for all mdstash functionality.
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    /// Context handed to every tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a new MCP server with the default configuration store and
    /// rendering-endpoint client.
    ///
    /// # Errors
    ///
    /// Returns an error when the platform reports no per-user configuration
    /// directory, or when the HTTP client cannot be constructed.
    pub fn new() -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let config_store = Arc::new(ConfigStore::new()?);
        let reader_client = Arc::new(ReaderClient::new()?);
        Ok(Self::with_context(ToolContext::new(
            config_store,
            reader_client,
        )))
    }

    /// Create a new MCP server around an existing tool context.
    ///
    /// Used by tests to point the server at temporary directories and a mock
    /// rendering endpoint.
    pub fn with_context(context: ToolContext) -> Self {
        let mut registry = ToolRegistry::new();
        register_downloads_tools(&mut registry);

        Self {
            tool_registry: Arc::new(registry),
            tool_context: Arc::new(context),
        }
    }

    /// Names of all registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_registry.list_tool_names()
    }
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<InitializeResult, McpError> {
        tracing::info!(
            "MCP client connecting: {} v{}",
            request.client_info.name,
            request.client_info.version
        );

        Ok(create_server_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!(
            "call_tool() invoked for tool: {}, arguments: {:?}",
            request.name,
            request.arguments
        );

        let tool = self.tool_registry.get_tool(&request.name).ok_or_else(|| {
            tracing::error!("Unknown tool requested: {}", request.name);
            McpError::invalid_request(format!("Unknown tool: {}", request.name), None)
        })?;

        let arguments = request.arguments.unwrap_or_default();
        let result = tool.execute(arguments, &self.tool_context).await;

        match &result {
            Ok(call_result) if call_result.is_error == Some(true) => {
                tracing::warn!("Tool {} reported a failure", request.name);
            }
            Ok(_) => {
                tracing::debug!("Tool {} completed successfully", request.name);
            }
            Err(e) => {
                tracing::error!("Tool {} rejected the request: {}", request.name, e);
            }
        }

        result
    }

    fn get_info(&self) -> ServerInfo {
        create_server_info()
    }
}
