//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AvailabilityService, EmployeeService, PreferenceService, RoleService, ServiceContainer,
    ShiftService, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub role_service: Arc<dyn RoleService>,
    pub employee_service: Arc<dyn EmployeeService>,
    pub shift_service: Arc<dyn ShiftService>,
    pub availability_service: Arc<dyn AvailabilityService>,
    pub preference_service: Arc<dyn PreferenceService>,
    /// Connection factory, used directly only by the health check
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the state for the store named in `config`.
    ///
    /// Nothing is opened here; each request opens and closes its own
    /// connection.
    pub fn from_config(config: &Config) -> Self {
        let database = Database::from_config(config);
        let container = Services::from_database(database.clone());

        Self::new(&container, Arc::new(database))
    }

    /// Take every service from `container`.
    pub fn new(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            role_service: container.roles(),
            employee_service: container.employees(),
            shift_service: container.shifts(),
            availability_service: container.availability(),
            preference_service: container.preferences(),
            database,
        }
    }
}
