//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Shift scheduling service backed by a single SQLite file
#[derive(Parser, Debug)]
#[command(name = "shift-scheduler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Store URL, overriding DATABASE_URL
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the schema if needed, then start the HTTP server
    Serve(ServeArgs),

    /// Create any missing tables and indexes, then exit
    InitDb,
}

/// Arguments for the serve command; unset values come from the configuration
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_overrides() {
        let cli = Cli::parse_from([
            "shift-scheduler",
            "--database-url",
            "sqlite::memory:",
            "serve",
            "--port",
            "9000",
        ]);

        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_init_db_accepts_global_verbose() {
        let cli = Cli::parse_from(["shift-scheduler", "init-db", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::InitDb));
    }
}
