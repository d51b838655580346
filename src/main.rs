//! Shift Scheduler - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;

use shift_scheduler::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    utils::init_tracing,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env();
    if let Some(url) = cli.database_url {
        config = config.with_database_url(url);
    }

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_tracing(cli.verbose, &config);
    tracing::debug!("Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::InitDb => commands::init_db::execute(config).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
