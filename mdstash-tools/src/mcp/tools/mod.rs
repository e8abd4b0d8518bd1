//! MCP tool implementations
//!
//! Each tool family lives in its own module following the registry pattern:
//! one submodule per tool with a dedicated implementation and description
//! file, plus a registration function wiring the family into a
//! [`ToolRegistry`](crate::mcp::ToolRegistry).

pub mod downloads;
