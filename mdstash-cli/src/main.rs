//! mdstash command line entry point

use clap::Parser;
use std::process;

mod cli;
mod commands;
mod exit_codes;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    configure_logging(cli.verbose, cli.debug, cli.quiet);

    let exit_code = match cli.command {
        Commands::Serve => commands::serve::handle_command().await,
    };
    process::exit(exit_code);
}

/// Configure tracing output for the process.
///
/// Logs always go to stderr so stdout stays clean for the MCP stdio
/// transport. `RUST_LOG` takes precedence over the flag-derived level;
/// rmcp's own logging is capped at warn either way.
fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    use tracing::Level;
    use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

    let log_level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rmcp=warn,{log_level}")));

    registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
