//! Infrastructure layer - External systems integration
//!
//! This module handles the store:
//! - Connection factory and schema provisioning
//! - SeaORM entities and connection-scoped repositories
//! - Unit of Work for per-request connection management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    AvailabilityRepository, EmployeeRepository, PreferenceRepository, RoleRepository,
    ShiftRepository,
};
pub use unit_of_work::{Persistence, StoreContext, UnitOfWork};
