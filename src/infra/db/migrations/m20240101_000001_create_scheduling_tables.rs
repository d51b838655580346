//! Migration: Create the scheduling tables.
//!
//! Every statement is `IF NOT EXISTS`, so a store provisioned by an earlier
//! deployment is adopted as-is.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::RoleId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Roles::RoleName).string().not_null().unique_key())
                    .col(ColumnDef::new(Roles::Description).text().null())
                    .col(&mut store_timestamp(Roles::CreatedAt))
                    .col(&mut store_timestamp(Roles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::EmployeeId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(ColumnDef::new(Employees::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Employees::RoleId).integer().null())
                    .col(&mut store_timestamp(Employees::CreatedAt))
                    .col(&mut store_timestamp(Employees::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_role")
                            .from(Employees::Table, Employees::RoleId)
                            .to(Roles::Table, Roles::RoleId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Shifts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Shifts::ShiftId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Shifts::RoleId).integer().not_null())
                    .col(ColumnDef::new(Shifts::Description).text().null())
                    .col(ColumnDef::new(Shifts::StartTime).date_time().not_null())
                    .col(ColumnDef::new(Shifts::EndTime).date_time().not_null())
                    .col(ColumnDef::new(Shifts::EmployeeId).integer().null())
                    .col(&mut store_timestamp(Shifts::CreatedAt))
                    .col(&mut store_timestamp(Shifts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shifts_role")
                            .from(Shifts::Table, Shifts::RoleId)
                            .to(Roles::Table, Roles::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shifts_employee")
                            .from(Shifts::Table, Shifts::EmployeeId)
                            .to(Employees::Table, Employees::EmployeeId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeeAvailability::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeeAvailability::AvailabilityId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmployeeAvailability::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(EmployeeAvailability::DayOfWeek).integer().not_null())
                    // Canonical HH:MM:SS text
                    .col(ColumnDef::new(EmployeeAvailability::StartTime).string().not_null())
                    .col(ColumnDef::new(EmployeeAvailability::EndTime).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_availability_employee")
                            .from(EmployeeAvailability::Table, EmployeeAvailability::EmployeeId)
                            .to(Employees::Table, Employees::EmployeeId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_availability_slot")
                    .table(EmployeeAvailability::Table)
                    .col(EmployeeAvailability::EmployeeId)
                    .col(EmployeeAvailability::DayOfWeek)
                    .col(EmployeeAvailability::StartTime)
                    .col(EmployeeAvailability::EndTime)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EmployeePreferences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EmployeePreferences::PreferenceId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EmployeePreferences::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(EmployeePreferences::AvailabilityId).integer().not_null())
                    .col(ColumnDef::new(EmployeePreferences::PreferenceLevel).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_preferences_employee")
                            .from(EmployeePreferences::Table, EmployeePreferences::EmployeeId)
                            .to(Employees::Table, Employees::EmployeeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_preferences_availability")
                            .from(EmployeePreferences::Table, EmployeePreferences::AvailabilityId)
                            .to(EmployeeAvailability::Table, EmployeeAvailability::AvailabilityId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_preference_pair")
                    .table(EmployeePreferences::Table)
                    .col(EmployeePreferences::EmployeeId)
                    .col(EmployeePreferences::AvailabilityId)
                    .unique()
                    .to_owned(),
            )
            .await
    }
}

/// Timestamp column filled in by the store on insert.
fn store_timestamp<T: IntoIden + 'static>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .date_time()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

#[derive(Iden)]
#[iden = "Roles"]
enum Roles {
    Table,
    #[iden = "RoleID"]
    RoleId,
    #[iden = "RoleName"]
    RoleName,
    #[iden = "Description"]
    Description,
    #[iden = "CreatedAt"]
    CreatedAt,
    #[iden = "UpdatedAt"]
    UpdatedAt,
}

#[derive(Iden)]
#[iden = "Employees"]
enum Employees {
    Table,
    #[iden = "EmployeeID"]
    EmployeeId,
    #[iden = "Name"]
    Name,
    #[iden = "Email"]
    Email,
    #[iden = "RoleID"]
    RoleId,
    #[iden = "CreatedAt"]
    CreatedAt,
    #[iden = "UpdatedAt"]
    UpdatedAt,
}

#[derive(Iden)]
#[iden = "Shifts"]
enum Shifts {
    Table,
    #[iden = "ShiftID"]
    ShiftId,
    #[iden = "RoleID"]
    RoleId,
    #[iden = "Description"]
    Description,
    #[iden = "StartTime"]
    StartTime,
    #[iden = "EndTime"]
    EndTime,
    #[iden = "EmployeeID"]
    EmployeeId,
    #[iden = "CreatedAt"]
    CreatedAt,
    #[iden = "UpdatedAt"]
    UpdatedAt,
}

#[derive(Iden)]
#[iden = "EmployeeAvailability"]
enum EmployeeAvailability {
    Table,
    #[iden = "AvailabilityID"]
    AvailabilityId,
    #[iden = "EmployeeID"]
    EmployeeId,
    #[iden = "DayOfWeek"]
    DayOfWeek,
    #[iden = "StartTime"]
    StartTime,
    #[iden = "EndTime"]
    EndTime,
}

#[derive(Iden)]
#[iden = "EmployeePreferences"]
enum EmployeePreferences {
    Table,
    #[iden = "PreferenceID"]
    PreferenceId,
    #[iden = "EmployeeID"]
    EmployeeId,
    #[iden = "AvailabilityID"]
    AvailabilityId,
    #[iden = "PreferenceLevel"]
    PreferenceLevel,
}
