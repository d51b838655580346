//! Preference repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::entities::preference::{self, ActiveModel, Entity as PreferenceEntity};
use super::insert_committed;
use crate::domain::{NewPreference, Preference};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Preference repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// Find the preference an employee gave for an availability window
    async fn find_pair(&self, employee_id: i32, availability_id: i32) -> AppResult<Option<Preference>>;

    /// Insert a preference
    async fn create(&self, preference: NewPreference) -> AppResult<Preference>;

    /// All preferences in id order
    async fn list(&self) -> AppResult<Vec<Preference>>;

    /// Preferences of one employee, in id order
    async fn list_for_employee(&self, employee_id: i32) -> AppResult<Vec<Preference>>;
}

/// Preference repository over one open connection
pub struct PreferenceStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PreferenceStore<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PreferenceRepository for PreferenceStore<'_> {
    async fn find_pair(&self, employee_id: i32, availability_id: i32) -> AppResult<Option<Preference>> {
        let result = PreferenceEntity::find()
            .filter(preference::Column::EmployeeId.eq(employee_id))
            .filter(preference::Column::AvailabilityId.eq(availability_id))
            .one(self.db)
            .await?;

        Ok(result.map(Preference::from))
    }

    async fn create(&self, preference: NewPreference) -> AppResult<Preference> {
        let active_model = ActiveModel {
            employee_id: Set(preference.employee_id),
            availability_id: Set(preference.availability_id),
            preference_level: Set(preference.preference_level),
            ..Default::default()
        };

        let model = insert_committed(self.db, active_model).await?;
        Ok(Preference::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Preference>> {
        let models = PreferenceEntity::find()
            .order_by_asc(preference::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Preference::from).collect())
    }

    async fn list_for_employee(&self, employee_id: i32) -> AppResult<Vec<Preference>> {
        let models = PreferenceEntity::find()
            .filter(preference::Column::EmployeeId.eq(employee_id))
            .order_by_asc(preference::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Preference::from).collect())
    }
}
