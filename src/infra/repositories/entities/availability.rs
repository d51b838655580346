//! Availability database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Availability, ClockTime};
use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "EmployeeAvailability")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "AvailabilityID")]
    pub id: i32,
    #[sea_orm(column_name = "EmployeeID")]
    pub employee_id: i32,
    #[sea_orm(column_name = "DayOfWeek")]
    pub day_of_week: i32,
    /// Canonical `HH:MM:SS`
    #[sea_orm(column_name = "StartTime")]
    pub start_time: String,
    #[sea_orm(column_name = "EndTime")]
    pub end_time: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Availability {
    type Error = AppError;

    fn try_from(model: Model) -> AppResult<Self> {
        Ok(Availability {
            id: model.id,
            employee_id: model.employee_id,
            day_of_week: model.day_of_week,
            start_time: ClockTime::parse(&model.start_time)?.time(),
            end_time: ClockTime::parse(&model.end_time)?.time(),
        })
    }
}
