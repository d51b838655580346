//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use super::insert_committed;
use crate::domain::{Employee, NewEmployee};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Whether an employee with this id exists
    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Find employee by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Insert an employee
    async fn create(&self, employee: NewEmployee) -> AppResult<Employee>;

    /// All employees in id order
    async fn list(&self) -> AppResult<Vec<Employee>>;
}

/// Employee repository over one open connection
pub struct EmployeeStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeStore<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore<'_> {
    async fn exists(&self, id: i32) -> AppResult<bool> {
        let found = EmployeeEntity::find_by_id(id).one(self.db).await?;
        Ok(found.is_some())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find()
            .filter(employee::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(result.map(Employee::from))
    }

    async fn create(&self, employee: NewEmployee) -> AppResult<Employee> {
        let active_model = ActiveModel {
            name: Set(employee.name().to_string()),
            email: Set(employee.email().as_str().to_string()),
            role_id: Set(employee.role_id()),
            ..Default::default()
        };

        let model = insert_committed(self.db, active_model).await?;
        Ok(Employee::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Employee::from).collect())
    }
}
