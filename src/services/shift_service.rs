//! Shift service - Handles shift-related use cases.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Arc;

use crate::domain::{NewShift, Shift, ShiftWindow};
use crate::errors::{AppError, AppResult};
use crate::infra::{EmployeeRepository, RoleRepository, ShiftRepository, UnitOfWork};

/// Raw shift fields as received from a client
#[derive(Debug, Clone)]
pub struct ShiftRequest {
    pub role_id: i32,
    pub description: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub employee_id: Option<i32>,
}

#[async_trait]
pub trait ShiftService: Send + Sync {
    /// Create a shift for an existing role, optionally assigned to an
    /// existing employee.
    async fn create_shift(&self, request: ShiftRequest) -> AppResult<Shift>;

    async fn list_shifts(&self) -> AppResult<Vec<Shift>>;
}

pub struct ShiftManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ShiftManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ShiftService for ShiftManager<U> {
    async fn create_shift(&self, request: ShiftRequest) -> AppResult<Shift> {
        self.uow
            .run(move |ctx| {
                Box::pin(async move {
                    add_shift(&ctx.shifts(), &ctx.roles(), &ctx.employees(), request).await
                })
            })
            .await
    }

    async fn list_shifts(&self) -> AppResult<Vec<Shift>> {
        self.uow
            .run(|ctx| Box::pin(async move { ctx.shifts().list().await }))
            .await
    }
}

/// The role must exist, the assigned employee (when given) must exist, and
/// the start must come before the end. Checked in that order.
pub async fn add_shift<S, R, E>(
    shifts: &S,
    roles: &R,
    employees: &E,
    request: ShiftRequest,
) -> AppResult<Shift>
where
    S: ShiftRepository + ?Sized,
    R: RoleRepository + ?Sized,
    E: EmployeeRepository + ?Sized,
{
    if !roles.exists(request.role_id).await? {
        let message = format!("Role with ID {} does not exist.", request.role_id);
        tracing::warn!("{}", message);
        return Err(AppError::validation(message));
    }

    if let Some(employee_id) = request.employee_id {
        if !employees.exists(employee_id).await? {
            let message = format!("Employee with ID {} does not exist.", employee_id);
            tracing::warn!("{}", message);
            return Err(AppError::validation(message));
        }
    }

    let window = ShiftWindow::new(request.start_time, request.end_time)
        .inspect_err(|e| tracing::warn!("{}", e))?;
    let shift = NewShift {
        role_id: request.role_id,
        description: request.description,
        window,
        employee_id: request.employee_id,
    };

    let created = shifts.create(shift).await?;
    tracing::info!(shift_id = created.id, "Shift created");
    Ok(created)
}
