//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `init-db` - Provision the store schema

pub mod args;

pub use args::{Cli, Commands};
