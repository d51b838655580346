//! Employee service - Handles employee-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Employee, NewEmployee};
use crate::errors::{AppError, AppResult};
use crate::infra::{EmployeeRepository, RoleRepository, UnitOfWork};

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    async fn create_employee(
        &self,
        name: String,
        email: String,
        role_id: Option<i32>,
    ) -> AppResult<Employee>;

    async fn list_employees(&self) -> AppResult<Vec<Employee>>;
}

pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn create_employee(
        &self,
        name: String,
        email: String,
        role_id: Option<i32>,
    ) -> AppResult<Employee> {
        let employee =
            NewEmployee::new(&name, &email, role_id).inspect_err(|e| tracing::warn!("{}", e))?;

        self.uow
            .run(move |ctx| {
                Box::pin(async move {
                    add_employee(&ctx.employees(), &ctx.roles(), employee).await
                })
            })
            .await
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.uow
            .run(|ctx| Box::pin(async move { ctx.employees().list().await }))
            .await
    }
}

/// Email must be unused and the role, when given, must exist.
pub async fn add_employee<E, R>(
    employees: &E,
    roles: &R,
    employee: NewEmployee,
) -> AppResult<Employee>
where
    E: EmployeeRepository + ?Sized,
    R: RoleRepository + ?Sized,
{
    let email = employee.email().as_str();
    if employees.find_by_email(email).await?.is_some() {
        let message = format!("An employee with email {} already exists.", email);
        tracing::warn!("{}", message);
        return Err(AppError::validation(message));
    }

    if let Some(role_id) = employee.role_id() {
        if !roles.exists(role_id).await? {
            let message = format!("Role with ID {} does not exist.", role_id);
            tracing::warn!("{}", message);
            return Err(AppError::validation(message));
        }
    }

    let created = employees.create(employee).await?;
    tracing::info!(employee_id = created.id, "Employee created");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockEmployeeRepository, MockRoleRepository};
    use chrono::NaiveDateTime;
    use mockall::predicate::eq;

    fn stored(input: &NewEmployee) -> Employee {
        let now = NaiveDateTime::default();
        Employee {
            id: 1,
            name: input.name().to_string(),
            email: input.email().as_str().to_string(),
            role_id: input.role_id(),
            created_at: now,
            updated_at: now,
        }
    }

    fn jane(role_id: Option<i32>) -> NewEmployee {
        NewEmployee::new("Jane", "jane@example.com", role_id).unwrap()
    }

    #[tokio::test]
    async fn test_add_employee_with_existing_role() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_find_by_email().returning(|_| Ok(None));
        employees
            .expect_create()
            .times(1)
            .returning(|input| Ok(stored(&input)));
        let mut roles = MockRoleRepository::new();
        roles.expect_exists().with(eq(1)).returning(|_| Ok(true));

        let employee = add_employee(&employees, &roles, jane(Some(1))).await.unwrap();

        assert_eq!(employee.role_id, Some(1));
        assert_eq!(employee.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_add_employee_without_role_skips_role_lookup() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_find_by_email().returning(|_| Ok(None));
        employees.expect_create().returning(|input| Ok(stored(&input)));
        let mut roles = MockRoleRepository::new();
        roles.expect_exists().never();

        let employee = add_employee(&employees, &roles, jane(None)).await.unwrap();

        assert_eq!(employee.role_id, None);
    }

    #[tokio::test]
    async fn test_add_employee_rejects_taken_email() {
        let mut employees = MockEmployeeRepository::new();
        employees
            .expect_find_by_email()
            .returning(|_| Ok(Some(stored(&jane(None)))));
        employees.expect_create().never();
        let roles = MockRoleRepository::new();

        let err = add_employee(&employees, &roles, jane(None)).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "An employee with email jane@example.com already exists."
        );
    }

    #[tokio::test]
    async fn test_add_employee_rejects_unknown_role() {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_find_by_email().returning(|_| Ok(None));
        employees.expect_create().never();
        let mut roles = MockRoleRepository::new();
        roles.expect_exists().returning(|_| Ok(false));

        let err = add_employee(&employees, &roles, jane(Some(999)))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Role with ID 999 does not exist.");
    }
}
