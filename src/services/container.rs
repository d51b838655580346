//! Service Container - Centralized service access.
//!
//! All services share one unit of work, which in turn holds only the
//! connection factory; no connection is opened until a request needs one.

use std::sync::Arc;

use super::{
    AvailabilityManager, AvailabilityService, EmployeeManager, EmployeeService,
    PreferenceManager, PreferenceService, RoleManager, RoleService, ShiftManager, ShiftService,
};
use crate::infra::{Database, Persistence};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn roles(&self) -> Arc<dyn RoleService>;

    fn employees(&self) -> Arc<dyn EmployeeService>;

    fn shifts(&self) -> Arc<dyn ShiftService>;

    fn availability(&self) -> Arc<dyn AvailabilityService>;

    fn preferences(&self) -> Arc<dyn PreferenceService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    role_service: Arc<dyn RoleService>,
    employee_service: Arc<dyn EmployeeService>,
    shift_service: Arc<dyn ShiftService>,
    availability_service: Arc<dyn AvailabilityService>,
    preference_service: Arc<dyn PreferenceService>,
}

impl Services {
    /// Wire every service to a unit of work over `database`
    pub fn from_database(database: Database) -> Self {
        let uow = Arc::new(Persistence::new(database));

        Self {
            role_service: Arc::new(RoleManager::new(uow.clone())),
            employee_service: Arc::new(EmployeeManager::new(uow.clone())),
            shift_service: Arc::new(ShiftManager::new(uow.clone())),
            availability_service: Arc::new(AvailabilityManager::new(uow.clone())),
            preference_service: Arc::new(PreferenceManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn roles(&self) -> Arc<dyn RoleService> {
        self.role_service.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn shifts(&self) -> Arc<dyn ShiftService> {
        self.shift_service.clone()
    }

    fn availability(&self) -> Arc<dyn AvailabilityService> {
        self.availability_service.clone()
    }

    fn preferences(&self) -> Arc<dyn PreferenceService> {
        self.preference_service.clone()
    }
}
