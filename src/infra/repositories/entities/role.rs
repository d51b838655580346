//! Role database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Role;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Roles")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "RoleID")]
    pub id: i32,
    #[sea_orm(column_name = "RoleName", unique)]
    pub name: String,
    #[sea_orm(column_name = "Description")]
    pub description: Option<String>,
    #[sea_orm(column_name = "CreatedAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "UpdatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Role {
    fn from(model: Model) -> Self {
        Role {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
