//! Application services layer - Use cases and business logic.
//!
//! Services turn raw request fields into validated domain inputs, then run
//! the store-side checks (existence, uniqueness) and the write inside one
//! unit of work. The `add_*` functions hold those store-side rules and work
//! against any repository implementation.

mod availability_service;
pub mod container;
mod employee_service;
mod preference_service;
mod role_service;
mod shift_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits, implementations and store-side rules
pub use availability_service::{add_availability, AvailabilityManager, AvailabilityService};
pub use employee_service::{add_employee, EmployeeManager, EmployeeService};
pub use preference_service::{add_preference, PreferenceManager, PreferenceService};
pub use role_service::{add_role, RoleManager, RoleService};
pub use shift_service::{add_shift, ShiftManager, ShiftRequest, ShiftService};
