//! Shift repository implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::shift::{self, ActiveModel, Entity as ShiftEntity};
use super::insert_committed;
use crate::domain::{NewShift, Shift};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Shift repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// Insert a shift
    async fn create(&self, shift: NewShift) -> AppResult<Shift>;

    /// All shifts in id order
    async fn list(&self) -> AppResult<Vec<Shift>>;
}

/// Shift repository over one open connection
pub struct ShiftStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftStore<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ShiftRepository for ShiftStore<'_> {
    async fn create(&self, shift: NewShift) -> AppResult<Shift> {
        let active_model = ActiveModel {
            role_id: Set(shift.role_id),
            description: Set(shift.description),
            start_time: Set(shift.window.start()),
            end_time: Set(shift.window.end()),
            employee_id: Set(shift.employee_id),
            ..Default::default()
        };

        let model = insert_committed(self.db, active_model).await?;
        Ok(Shift::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Shift>> {
        let models = ShiftEntity::find()
            .order_by_asc(shift::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Shift::from).collect())
    }
}
