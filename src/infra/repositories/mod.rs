//! Repository layer - Data access abstraction
//!
//! Each repository trait is implemented by a store over the request's
//! connection. Lookups run in autocommit; every insert commits in its own
//! short transaction, so a writer never holds a read lock while it waits
//! for the write lock.

mod availability_repository;
mod employee_repository;
pub(crate) mod entities;
mod preference_repository;
mod role_repository;
mod shift_repository;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    TransactionTrait,
};

use crate::errors::AppResult;

pub use availability_repository::{AvailabilityRepository, AvailabilityStore};
pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use preference_repository::{PreferenceRepository, PreferenceStore};
pub use role_repository::{RoleRepository, RoleStore};
pub use shift_repository::{ShiftRepository, ShiftStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use availability_repository::MockAvailabilityRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use preference_repository::MockPreferenceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use role_repository::MockRoleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use shift_repository::MockShiftRepository;

/// Insert one row inside a transaction of its own.
///
/// The INSERT is the first statement of the transaction, so SQLite takes the
/// write lock straight away and waits out the busy timeout on contention.
/// Commits on success, rolls back on failure.
pub(crate) async fn insert_committed<A>(
    db: &DatabaseConnection,
    active_model: A,
) -> AppResult<<A::Entity as EntityTrait>::Model>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let txn = db.begin().await?;

    match active_model.insert(&txn).await {
        Ok(model) => {
            txn.commit().await?;
            Ok(model)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e.into())
        }
    }
}
