//! # mdstash Tools
//!
//! MCP (Model Context Protocol) server and tools for mdstash.
//!
//! This crate exposes the downloads-manager operations as MCP tools served
//! over stdio:
//!
//! - `downloads_fetch`: fetch a markdown rendering of a webpage and save it
//! - `downloads_list`: list saved artifacts
//! - `downloads_set_root`: change the root download directory
//! - `downloads_get_root`: report the root download directory
//! - `downloads_create_dir`: create a subdirectory under the root
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mdstash_tools::McpServer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let server = McpServer::new()?;
//!
//! // Server is ready to handle MCP requests
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Model Context Protocol (MCP) server and tools
pub mod mcp;

// Re-export key types for convenience
pub use mcp::McpServer;
pub use mcp::{register_downloads_tools, ToolContext, ToolRegistry};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
