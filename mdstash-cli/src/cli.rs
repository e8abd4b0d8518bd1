//! Command line argument definitions for mdstash

use clap::{Parser, Subcommand};

/// mdstash saves markdown renderings of webpages into a managed downloads
/// directory and serves the operations over the Model Context Protocol.
#[derive(Debug, Parser)]
#[command(name = "mdstash", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (trace) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio
    ///
    /// Blocks until the client disconnects. Logs go to stderr so stdout
    /// stays clean for the MCP transport.
    Serve,
}
