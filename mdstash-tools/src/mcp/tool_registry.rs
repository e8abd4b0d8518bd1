//! Tool registry for MCP operations
//!
//! This module provides a registry pattern for managing MCP tools:
//!
//! 1. **McpTool Trait**: Defines the interface that all tools must implement
//! 2. **ToolRegistry**: Central registry that stores and manages tool instances
//! 3. **ToolContext**: Shared context providing access to the configuration
//!    store and the rendering-endpoint client
//! 4. **BaseToolImpl**: Common utility methods for tool implementations
//!
//! # Creating New Tools
//!
//! To create a new MCP tool:
//!
//! 1. Create a struct implementing the `McpTool` trait
//! 2. Define the tool's schema using JSON Schema
//! 3. Implement the execute method with your business logic
//! 4. Register the tool with the appropriate registry function
//!
//! ```rust,ignore
//! #[derive(Default)]
//! pub struct MyTool;
//!
//! #[async_trait]
//! impl McpTool for MyTool {
//!     fn name(&self) -> &'static str {
//!         "my_tool_name"
//!     }
//!
//!     fn description(&self) -> &'static str {
//!         include_str!("description.md")
//!     }
//!
//!     fn schema(&self) -> serde_json::Value {
//!         serde_json::json!({
//!             "type": "object",
//!             "properties": {
//!                 "param": {"type": "string", "description": "Parameter description"}
//!             },
//!             "required": ["param"]
//!         })
//!     }
//!
//!     async fn execute(
//!         &self,
//!         arguments: serde_json::Map<String, serde_json::Value>,
//!         context: &ToolContext,
//!     ) -> std::result::Result<CallToolResult, McpError> {
//!         let request: MyRequest = BaseToolImpl::parse_arguments(arguments)?;
//!         // Tool implementation here
//!         Ok(BaseToolImpl::create_success_response("Success!"))
//!     }
//! }
//! ```

use mdstash_downloads::ConfigStore;
use mdstash_reader::ReaderClient;
use rmcp::model::{CallToolResult, Content, Tool};
use rmcp::ErrorData as McpError;
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared by all tools during execution
///
/// The context carries the two collaborators every download tool needs: the
/// configuration store (re-read from disk by each operation, never cached
/// here) and the client for the markdown rendering endpoint.
#[derive(Clone)]
pub struct ToolContext {
    /// Store for the persisted downloads configuration record
    pub config_store: Arc<ConfigStore>,

    /// Client for the markdown rendering endpoint
    pub reader_client: Arc<ReaderClient>,
}

impl ToolContext {
    /// Create a new tool context
    pub fn new(config_store: Arc<ConfigStore>, reader_client: Arc<ReaderClient>) -> Self {
        Self {
            config_store,
            reader_client,
        }
    }
}

/// Trait defining the interface for all MCP tools
///
/// # Design Principles
///
/// - **Stateless**: Tools derive all context from the `ToolContext`
/// - **Thread-Safe**: Tools must be `Send + Sync` to work in async environments
/// - **Self-Describing**: Tools provide their own schema and documentation
///
/// # Implementation Guidelines
///
/// Tool names follow the pattern `{domain}_{action}` (e.g. `downloads_fetch`).
/// Names must be unique within the registry and stable across versions.
/// Descriptions are loaded with `include_str!("description.md")` from a file
/// next to the tool module.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's unique identifier name
    fn name(&self) -> &'static str;

    /// Get the tool's human-readable description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for argument validation
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given arguments and context
    ///
    /// Malformed arguments are rejected with `McpError::invalid_params`
    /// before any I/O; every downstream failure is reported in-band as a
    /// [`CallToolResult`] with `is_error` set so the server keeps serving.
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry for managing MCP tools
///
/// The registry is populated once at startup and read for every dispatch;
/// HashMap lookup keeps tool resolution O(1).
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool in the registry
    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// List all registered tool names
    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema = tool.schema();
                let schema_map = if let serde_json::Value::Object(map) = schema {
                    map
                } else {
                    serde_json::Map::new()
                };

                Tool::new(
                    tool.name(),
                    tool.description(),
                    std::sync::Arc::new(schema_map),
                )
            })
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    ///
    /// # Arguments
    ///
    /// * `arguments` - The JSON map of arguments from the MCP request
    ///
    /// # Returns
    ///
    /// * `Result<T, McpError>` - The parsed arguments or an invalid-params error
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<T, McpError> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
    }

    /// Create a success response with the given message
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult::success(vec![Content::text(content.into())])
    }

    /// Create an error response with the given error message
    ///
    /// The error is reported in-band (a soft failure): the result carries
    /// `is_error: Some(true)` but the call itself succeeds, so the host loop
    /// keeps serving subsequent requests.
    pub fn create_error_response<T: Into<String>>(
        error: T,
        details: Option<String>,
    ) -> CallToolResult {
        let error_text = match details {
            Some(details) => format!("{}: {}", error.into(), details),
            None => error.into(),
        };

        CallToolResult::error(vec![Content::text(error_text)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    struct MockTool {
        name: &'static str,
    }

    #[async_trait::async_trait]
    impl McpTool for MockTool {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "A mock tool for testing"
        }

        fn schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {},
            })
        }

        async fn execute(
            &self,
            _arguments: serde_json::Map<String, serde_json::Value>,
            _context: &ToolContext,
        ) -> std::result::Result<CallToolResult, McpError> {
            Ok(BaseToolImpl::create_success_response("mock"))
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(MockTool { name: "mock_tool" });

        assert_eq!(registry.len(), 1);
        assert!(registry.get_tool("mock_tool").is_some());
        assert!(registry.get_tool("missing_tool").is_none());
    }

    #[test]
    fn test_registry_list_tools_carries_schema() {
        let mut registry = ToolRegistry::new();
        registry.register(MockTool { name: "mock_tool" });

        let tools = registry.list_tools();

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "mock_tool");
        assert!(tools[0].input_schema.contains_key("type"));
    }

    #[test]
    fn test_parse_arguments_success() {
        #[derive(Deserialize)]
        struct TestArgs {
            value: String,
        }

        let mut args = serde_json::Map::new();
        args.insert(
            "value".to_string(),
            serde_json::Value::String("hello".to_string()),
        );

        let parsed: TestArgs = BaseToolImpl::parse_arguments(args).unwrap();
        assert_eq!(parsed.value, "hello");
    }

    #[test]
    fn test_parse_arguments_missing_required_field() {
        #[derive(Deserialize)]
        #[allow(dead_code)]
        struct TestArgs {
            value: String,
        }

        let result: Result<TestArgs, McpError> =
            BaseToolImpl::parse_arguments(serde_json::Map::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_success_response_is_not_error() {
        let response = BaseToolImpl::create_success_response("done");
        assert_eq!(response.is_error, Some(false));
    }

    #[test]
    fn test_success_response_carries_text() {
        let response = BaseToolImpl::create_success_response("done");

        let text: String = response
            .content
            .iter()
            .filter_map(|c| c.raw.as_text().map(|t| t.text.clone()))
            .collect();
        assert_eq!(text, "done");
    }

    #[test]
    fn test_error_response_with_details() {
        let response = BaseToolImpl::create_error_response("failed", Some("because".to_string()));
        assert_eq!(response.is_error, Some(true));

        let text: String = response
            .content
            .iter()
            .filter_map(|c| c.raw.as_text().map(|t| t.text.clone()))
            .collect();
        assert_eq!(text, "failed: because");
    }
}
