//! Shift database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Shift;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Shifts")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "ShiftID")]
    pub id: i32,
    #[sea_orm(column_name = "RoleID")]
    pub role_id: i32,
    #[sea_orm(column_name = "Description")]
    pub description: Option<String>,
    #[sea_orm(column_name = "StartTime")]
    pub start_time: DateTime,
    #[sea_orm(column_name = "EndTime")]
    pub end_time: DateTime,
    #[sea_orm(column_name = "EmployeeID")]
    pub employee_id: Option<i32>,
    #[sea_orm(column_name = "CreatedAt")]
    pub created_at: DateTime,
    #[sea_orm(column_name = "UpdatedAt")]
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Shift {
    fn from(model: Model) -> Self {
        Shift {
            id: model.id,
            role_id: model.role_id,
            description: model.description,
            start_time: model.start_time,
            end_time: model.end_time,
            employee_id: model.employee_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
