//! Unit of Work pattern implementation.
//!
//! One unit of work is one request's worth of store access:
//! - open a connection through the factory
//! - run the request's lookups and its insert on that connection
//! - close the connection on every path
//!
//! Lookups run in autocommit. The insert commits or rolls back in its own
//! transaction (see `repositories::insert_committed`), so concurrent writers
//! queue on SQLite's busy timeout instead of deadlocking on a lock upgrade.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;

use super::db::{close_quietly, Database};
use super::repositories::{
    AvailabilityStore, EmployeeStore, PreferenceStore, RoleStore, ShiftStore,
};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by a unit-of-work body.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Note: This trait is not mockable directly due to generic methods.
/// For testing, mock at the repository level or use integration tests.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Execute a closure against a freshly opened connection.
    ///
    /// The connection is closed whether the closure succeeds or fails.
    async fn run<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(StoreContext<'a>) -> StoreFuture<'a, T> + Send,
        T: Send;
}

/// Store context providing repository access on one connection.
pub struct StoreContext<'a> {
    connection: &'a DatabaseConnection,
}

impl<'a> StoreContext<'a> {
    fn new(connection: &'a DatabaseConnection) -> Self {
        Self { connection }
    }

    pub fn roles(&self) -> RoleStore<'a> {
        RoleStore::new(self.connection)
    }

    pub fn employees(&self) -> EmployeeStore<'a> {
        EmployeeStore::new(self.connection)
    }

    pub fn shifts(&self) -> ShiftStore<'a> {
        ShiftStore::new(self.connection)
    }

    pub fn availability(&self) -> AvailabilityStore<'a> {
        AvailabilityStore::new(self.connection)
    }

    pub fn preferences(&self) -> PreferenceStore<'a> {
        PreferenceStore::new(self.connection)
    }
}

/// Concrete implementation of UnitOfWork over the connection factory
pub struct Persistence {
    database: Database,
}

impl Persistence {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn run<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(StoreContext<'a>) -> StoreFuture<'a, T> + Send,
        T: Send,
    {
        let connection = self.database.open().await.ok_or(AppError::Connection)?;

        let result = f(StoreContext::new(&connection)).await;
        close_quietly(connection).await;

        result
    }
}
