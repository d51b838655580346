//! Database connection factory and schema provisioning.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;

use crate::config::{Config, SQLITE_BUSY_TIMEOUT_MS};

pub mod migrations;

pub use migrations::Migrator;

/// Connection factory for the single-file store.
///
/// Holds only the store URL. Every operation opens its own connection and
/// closes it before returning; no connection outlives a request.
#[derive(Debug, Clone)]
pub struct Database {
    url: String,
}

impl Database {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.database_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Open a fresh connection.
    ///
    /// Failure is logged and reported as `None`; callers decide how to
    /// surface it.
    pub async fn open(&self) -> Option<DatabaseConnection> {
        match self.try_open().await {
            Ok(connection) => {
                tracing::info!("Database connection established.");
                Some(connection)
            }
            Err(e) => {
                tracing::error!("Database connection failed: {}", e);
                None
            }
        }
    }

    async fn try_open(&self) -> Result<DatabaseConnection, DbErr> {
        let mut options = ConnectOptions::new(self.url.clone());
        options
            .max_connections(1)
            .min_connections(0)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;

        // Writers queue on the lock instead of failing with "database is locked"
        connection
            .execute_unprepared(&format!("PRAGMA busy_timeout = {};", SQLITE_BUSY_TIMEOUT_MS))
            .await?;

        Ok(connection)
    }

    /// Create any missing tables and indexes. Safe to run on every start.
    pub async fn init_schema(&self) -> Result<(), DbErr> {
        let connection = self.try_open().await?;
        let result = Migrator::up(&connection, None).await;
        close_quietly(connection).await;

        result?;
        tracing::info!("Database schema is up to date");
        Ok(())
    }

    /// Check store reachability by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        let connection = self.try_open().await?;
        let result = connection
            .execute(Statement::from_string(
                connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await;
        close_quietly(connection).await;

        result.map(|_| ())
    }
}

/// Close a connection, logging (not propagating) a failure to do so.
pub(crate) async fn close_quietly(connection: DatabaseConnection) {
    if let Err(e) = connection.close().await {
        tracing::warn!("Failed to close database connection: {}", e);
    }
}
