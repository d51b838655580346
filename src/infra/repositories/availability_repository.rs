//! Availability repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::entities::availability::{self, ActiveModel, Entity as AvailabilityEntity};
use super::insert_committed;
use crate::domain::{Availability, NewAvailability};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Availability repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Whether an availability window with this id exists
    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Find a window with the same employee, day and canonical times
    async fn find_slot(&self, slot: &NewAvailability) -> AppResult<Option<Availability>>;

    /// Insert a window
    async fn create(&self, slot: NewAvailability) -> AppResult<Availability>;

    /// All windows in id order
    async fn list(&self) -> AppResult<Vec<Availability>>;

    /// Windows belonging to one employee, in id order
    async fn list_for_employee(&self, employee_id: i32) -> AppResult<Vec<Availability>>;
}

/// Availability repository over one open connection
pub struct AvailabilityStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityStore<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AvailabilityRepository for AvailabilityStore<'_> {
    async fn exists(&self, id: i32) -> AppResult<bool> {
        let found = AvailabilityEntity::find_by_id(id).one(self.db).await?;
        Ok(found.is_some())
    }

    async fn find_slot(&self, slot: &NewAvailability) -> AppResult<Option<Availability>> {
        let result = AvailabilityEntity::find()
            .filter(availability::Column::EmployeeId.eq(slot.employee_id))
            .filter(availability::Column::DayOfWeek.eq(slot.day_of_week))
            .filter(availability::Column::StartTime.eq(slot.start_time.canonical()))
            .filter(availability::Column::EndTime.eq(slot.end_time.canonical()))
            .one(self.db)
            .await?;

        result.map(Availability::try_from).transpose()
    }

    async fn create(&self, slot: NewAvailability) -> AppResult<Availability> {
        let active_model = ActiveModel {
            employee_id: Set(slot.employee_id),
            day_of_week: Set(slot.day_of_week),
            start_time: Set(slot.start_time.canonical()),
            end_time: Set(slot.end_time.canonical()),
            ..Default::default()
        };

        let model = insert_committed(self.db, active_model).await?;
        Availability::try_from(model)
    }

    async fn list(&self) -> AppResult<Vec<Availability>> {
        let models = AvailabilityEntity::find()
            .order_by_asc(availability::Column::Id)
            .all(self.db)
            .await?;

        models.into_iter().map(Availability::try_from).collect()
    }

    async fn list_for_employee(&self, employee_id: i32) -> AppResult<Vec<Availability>> {
        let models = AvailabilityEntity::find()
            .filter(availability::Column::EmployeeId.eq(employee_id))
            .order_by_asc(availability::Column::Id)
            .all(self.db)
            .await?;

        models.into_iter().map(Availability::try_from).collect()
    }
}
