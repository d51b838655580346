//! Availability service - Weekly windows an employee can work.

use async_trait::async_trait;
use chrono::NaiveTime;
use std::sync::Arc;

use crate::domain::{Availability, ClockTime, NewAvailability};
use crate::errors::{AppError, AppResult};
use crate::infra::{AvailabilityRepository, EmployeeRepository, UnitOfWork};

#[async_trait]
pub trait AvailabilityService: Send + Sync {
    /// Record a window. `day_of_week` is expected in 0..=6.
    async fn create_availability(
        &self,
        employee_id: i32,
        day_of_week: i32,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AppResult<Availability>;

    async fn list_availability(&self) -> AppResult<Vec<Availability>>;

    /// Windows of one employee; empty when there are none
    async fn list_availability_for_employee(&self, employee_id: i32)
        -> AppResult<Vec<Availability>>;
}

pub struct AvailabilityManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AvailabilityManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AvailabilityService for AvailabilityManager<U> {
    async fn create_availability(
        &self,
        employee_id: i32,
        day_of_week: i32,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AppResult<Availability> {
        let slot = NewAvailability {
            employee_id,
            day_of_week,
            start_time: ClockTime::new(start_time),
            end_time: ClockTime::new(end_time),
        };

        self.uow
            .run(move |ctx| {
                Box::pin(async move {
                    add_availability(&ctx.availability(), &ctx.employees(), slot).await
                })
            })
            .await
    }

    async fn list_availability(&self) -> AppResult<Vec<Availability>> {
        self.uow
            .run(|ctx| Box::pin(async move { ctx.availability().list().await }))
            .await
    }

    async fn list_availability_for_employee(
        &self,
        employee_id: i32,
    ) -> AppResult<Vec<Availability>> {
        self.uow
            .run(move |ctx| {
                Box::pin(async move { ctx.availability().list_for_employee(employee_id).await })
            })
            .await
    }
}

/// The employee must exist and the exact slot must not be recorded yet.
pub async fn add_availability<A, E>(
    availability: &A,
    employees: &E,
    slot: NewAvailability,
) -> AppResult<Availability>
where
    A: AvailabilityRepository + ?Sized,
    E: EmployeeRepository + ?Sized,
{
    if !employees.exists(slot.employee_id).await? {
        let message = format!("Employee with ID {} does not exist.", slot.employee_id);
        tracing::warn!("{}", message);
        return Err(AppError::validation(message));
    }

    if availability.find_slot(&slot).await?.is_some() {
        let message = "An availability for the given employee and time slot already exists.";
        tracing::warn!("{}", message);
        return Err(AppError::validation(message));
    }

    let created = availability.create(slot).await?;
    tracing::info!(availability_id = created.id, "Availability created");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockAvailabilityRepository, MockEmployeeRepository};

    fn hm(h: u32, m: u32) -> ClockTime {
        ClockTime::new(NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    fn monday_nine_to_five() -> NewAvailability {
        NewAvailability {
            employee_id: 1,
            day_of_week: 0,
            start_time: hm(9, 0),
            end_time: hm(17, 0),
        }
    }

    fn stored(slot: &NewAvailability) -> Availability {
        Availability {
            id: 1,
            employee_id: slot.employee_id,
            day_of_week: slot.day_of_week,
            start_time: slot.start_time.time(),
            end_time: slot.end_time.time(),
        }
    }

    #[tokio::test]
    async fn test_add_availability_for_known_employee() {
        let mut availability = MockAvailabilityRepository::new();
        availability.expect_find_slot().returning(|_| Ok(None));
        availability
            .expect_create()
            .times(1)
            .returning(|slot| Ok(stored(&slot)));
        let mut employees = MockEmployeeRepository::new();
        employees.expect_exists().returning(|_| Ok(true));

        let created = add_availability(&availability, &employees, monday_nine_to_five())
            .await
            .unwrap();

        assert_eq!(created.day_of_week, 0);
        assert_eq!(created.end_time, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn test_add_availability_rejects_unknown_employee() {
        let mut availability = MockAvailabilityRepository::new();
        availability.expect_find_slot().never();
        availability.expect_create().never();
        let mut employees = MockEmployeeRepository::new();
        employees.expect_exists().returning(|_| Ok(false));

        let err = add_availability(&availability, &employees, monday_nine_to_five())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Employee with ID 1 does not exist.");
    }

    #[tokio::test]
    async fn test_add_availability_rejects_duplicate_slot() {
        let mut availability = MockAvailabilityRepository::new();
        availability
            .expect_find_slot()
            .returning(|slot| Ok(Some(stored(slot))));
        availability.expect_create().never();
        let mut employees = MockEmployeeRepository::new();
        employees.expect_exists().returning(|_| Ok(true));

        let err = add_availability(&availability, &employees, monday_nine_to_five())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "An availability for the given employee and time slot already exists."
        );
    }
}
