//! Init-db command - Provisions the store schema.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the init-db command
pub async fn execute(config: Config) -> AppResult<()> {
    let database = Database::from_config(&config);
    tracing::info!("Initializing schema at {}", database.url());

    database.init_schema().await?;

    tracing::info!("Database initialized");
    Ok(())
}
