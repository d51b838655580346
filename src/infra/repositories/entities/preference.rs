//! Preference database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Preference;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "EmployeePreferences")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "PreferenceID")]
    pub id: i32,
    #[sea_orm(column_name = "EmployeeID")]
    pub employee_id: i32,
    #[sea_orm(column_name = "AvailabilityID")]
    pub availability_id: i32,
    #[sea_orm(column_name = "PreferenceLevel")]
    pub preference_level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Preference {
    fn from(model: Model) -> Self {
        Preference {
            id: model.id,
            employee_id: model.employee_id,
            availability_id: model.availability_id,
            preference_level: model.preference_level,
        }
    }
}
