//! Command modules for the mdstash CLI
//!
//! Each command is organized in its own module returning an exit code from
//! its `handle_command` entry point.

pub mod serve;
