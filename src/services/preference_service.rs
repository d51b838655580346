//! Preference service - Employee preferences over their availability windows.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewPreference, Preference};
use crate::errors::{AppError, AppResult};
use crate::infra::{
    AvailabilityRepository, EmployeeRepository, PreferenceRepository, UnitOfWork,
};

#[async_trait]
pub trait PreferenceService: Send + Sync {
    async fn create_preference(&self, preference: NewPreference) -> AppResult<Preference>;

    async fn list_preferences(&self) -> AppResult<Vec<Preference>>;

    /// Preferences of one employee; empty when there are none
    async fn list_preferences_for_employee(&self, employee_id: i32)
        -> AppResult<Vec<Preference>>;
}

pub struct PreferenceManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PreferenceManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PreferenceService for PreferenceManager<U> {
    async fn create_preference(&self, preference: NewPreference) -> AppResult<Preference> {
        self.uow
            .run(move |ctx| {
                Box::pin(async move {
                    add_preference(
                        &ctx.preferences(),
                        &ctx.employees(),
                        &ctx.availability(),
                        preference,
                    )
                    .await
                })
            })
            .await
    }

    async fn list_preferences(&self) -> AppResult<Vec<Preference>> {
        self.uow
            .run(|ctx| Box::pin(async move { ctx.preferences().list().await }))
            .await
    }

    async fn list_preferences_for_employee(
        &self,
        employee_id: i32,
    ) -> AppResult<Vec<Preference>> {
        self.uow
            .run(move |ctx| {
                Box::pin(async move { ctx.preferences().list_for_employee(employee_id).await })
            })
            .await
    }
}

/// Employee and availability must both exist, and the pair must be new.
///
/// The availability window is not required to belong to the same employee.
pub async fn add_preference<P, E, A>(
    preferences: &P,
    employees: &E,
    availability: &A,
    preference: NewPreference,
) -> AppResult<Preference>
where
    P: PreferenceRepository + ?Sized,
    E: EmployeeRepository + ?Sized,
    A: AvailabilityRepository + ?Sized,
{
    if !employees.exists(preference.employee_id).await? {
        let message = format!("Employee with ID {} does not exist.", preference.employee_id);
        tracing::warn!("{}", message);
        return Err(AppError::validation(message));
    }

    if !availability.exists(preference.availability_id).await? {
        let message = "Availability does not exist.";
        tracing::warn!(availability_id = preference.availability_id, "{}", message);
        return Err(AppError::validation(message));
    }

    if preferences
        .find_pair(preference.employee_id, preference.availability_id)
        .await?
        .is_some()
    {
        let message = "A preference for the given employee and availability already exists.";
        tracing::warn!("{}", message);
        return Err(AppError::validation(message));
    }

    let created = preferences.create(preference).await?;
    tracing::info!(preference_id = created.id, "Preference created");
    Ok(created)
}
