//! Role service - Handles role-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewRole, Role};
use crate::errors::{AppError, AppResult};
use crate::infra::{RoleRepository, UnitOfWork};

/// Role service trait for dependency injection.
#[async_trait]
pub trait RoleService: Send + Sync {
    /// Create a role with a unique, non-blank name
    async fn create_role(&self, name: String, description: Option<String>) -> AppResult<Role>;

    /// List all roles in storage order
    async fn list_roles(&self) -> AppResult<Vec<Role>>;
}

/// Concrete implementation of RoleService using Unit of Work.
pub struct RoleManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> RoleManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RoleService for RoleManager<U> {
    async fn create_role(&self, name: String, description: Option<String>) -> AppResult<Role> {
        let role = NewRole::new(&name, description).inspect_err(|e| tracing::warn!("{}", e))?;

        self.uow
            .run(move |ctx| Box::pin(async move { add_role(&ctx.roles(), role).await }))
            .await
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.uow
            .run(|ctx| Box::pin(async move { ctx.roles().list().await }))
            .await
    }
}

/// Reject a duplicate name, then insert.
///
/// The lookup is an early rejection only; the UNIQUE constraint on the
/// name column decides a race between two concurrent requests.
pub async fn add_role<R>(roles: &R, role: NewRole) -> AppResult<Role>
where
    R: RoleRepository + ?Sized,
{
    if roles.find_by_name(role.name()).await?.is_some() {
        let message = format!("Role name {} already exists.", role.name());
        tracing::warn!("{}", message);
        return Err(AppError::validation(message));
    }

    let created = roles.create(role).await?;
    tracing::info!(role_id = created.id, "Role created");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::MockRoleRepository;
    use chrono::NaiveDate;

    fn stored(id: i32, name: &str) -> Role {
        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Role {
            id,
            name: name.to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_add_role_inserts_new_name() {
        let mut repo = MockRoleRepository::new();
        repo.expect_find_by_name()
            .withf(|name| name == "Cashier")
            .returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|role| Ok(stored(1, role.name())));

        let role = add_role(&repo, NewRole::new(" Cashier ", None).unwrap())
            .await
            .unwrap();

        assert_eq!(role.id, 1);
        assert_eq!(role.name, "Cashier");
    }

    #[tokio::test]
    async fn test_add_role_rejects_existing_name() {
        let mut repo = MockRoleRepository::new();
        repo.expect_find_by_name()
            .returning(|name| Ok(Some(stored(7, name))));
        repo.expect_create().never();

        let err = add_role(&repo, NewRole::new("Cashier", None).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "Role name Cashier already exists.");
    }

    #[tokio::test]
    async fn test_add_role_surfaces_store_error() {
        let mut repo = MockRoleRepository::new();
        repo.expect_find_by_name().returning(|_| Ok(None));
        repo.expect_create().returning(|_| {
            Err(AppError::from(sea_orm::DbErr::Custom(
                "UNIQUE constraint failed: Roles.RoleName".into(),
            )))
        });

        let err = add_role(&repo, NewRole::new("Cashier", None).unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
    }
}
