//! Serve command implementation
//!
//! Starts the mdstash MCP (Model Context Protocol) server with stdio
//! transport. The server runs in blocking mode until the client disconnects
//! or an error occurs.

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use mdstash_tools::McpServer;
use rmcp::serve_server;
use rmcp::transport::io::stdio;

/// Handle the serve command
///
/// # Returns
///
/// Returns an exit code:
/// - 0: Server started and stopped successfully
/// - 1: Server stopped unexpectedly
/// - 2: Server failed to start
pub async fn handle_command() -> i32 {
    tracing::debug!("Starting MCP server in stdio mode");

    let server = match McpServer::new() {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to create MCP server: {}", e);
            eprintln!("Failed to create MCP server: {}", e);
            return EXIT_ERROR;
        }
    };

    let running_service = match serve_server(server, stdio()).await {
        Ok(service) => {
            tracing::info!("MCP server started successfully");
            service
        }
        Err(e) => {
            tracing::error!("MCP server error: {}", e);
            eprintln!("MCP server error: {}", e);
            return EXIT_WARNING;
        }
    };

    // Returns when the client disconnects, the server is cancelled, or a
    // serious error occurs.
    match running_service.waiting().await {
        Ok(quit_reason) => {
            tracing::info!("MCP server stopped: {:?}", quit_reason);
        }
        Err(e) => {
            tracing::error!("MCP server task error: {}", e);
            return EXIT_WARNING;
        }
    }

    tracing::info!("MCP server shutting down gracefully");
    EXIT_SUCCESS
}
