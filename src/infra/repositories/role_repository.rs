//! Role repository implementation.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::entities::role::{self, ActiveModel, Entity as RoleEntity};
use super::insert_committed;
use crate::domain::{NewRole, Role};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Role repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Whether a role with this id exists
    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Find role by exact name
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// Insert a role; id and timestamps come from the store
    async fn create(&self, role: NewRole) -> AppResult<Role>;

    /// All roles in id order
    async fn list(&self) -> AppResult<Vec<Role>>;
}

/// Role repository over one open connection
pub struct RoleStore<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleStore<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleRepository for RoleStore<'_> {
    async fn exists(&self, id: i32) -> AppResult<bool> {
        let found = RoleEntity::find_by_id(id).one(self.db).await?;
        Ok(found.is_some())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        let result = RoleEntity::find()
            .filter(role::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(result.map(Role::from))
    }

    async fn create(&self, role: NewRole) -> AppResult<Role> {
        let active_model = ActiveModel {
            name: Set(role.name().to_string()),
            description: Set(role.description().map(str::to_string)),
            ..Default::default()
        };

        let model = insert_committed(self.db, active_model).await?;
        Ok(Role::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find()
            .order_by_asc(role::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Role::from).collect())
    }
}
