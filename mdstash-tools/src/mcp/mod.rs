//! Model Context Protocol (MCP) server support
//!
//! This module provides MCP server functionality for serving the mdstash
//! download operations as tools over stdio.
//!
//! ## Architecture
//!
//! The module follows a layered architecture:
//!
//! 1. **Server Layer**: [`McpServer`] handles MCP protocol communication
//! 2. **Registry Layer**: [`ToolRegistry`] manages tool registration and dispatch
//! 3. **Tool Layer**: individual tool implementations under [`tools`]
//!
//! Tools share a [`ToolContext`] holding the configuration store and the
//! rendering-endpoint client. The configuration record itself is never
//! cached: each tool re-reads it from disk at the top of its execution.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mdstash_tools::mcp::{McpServer, ToolRegistry, register_downloads_tools};
//!
//! # fn example() {
//! let mut registry = ToolRegistry::new();
//! register_downloads_tools(&mut registry);
//!
//! println!("Registered {} tools", registry.len());
//! # }
//! ```

pub mod server;
pub mod tool_registry;
pub mod tools;

pub use server::McpServer;
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
pub use tools::downloads::register_downloads_tools;
