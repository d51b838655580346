//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    availability_handler, employee_handler, preference_handler, role_handler, shift_handler,
};
use crate::domain::{Availability, Employee, Preference, Role, Shift};

/// OpenAPI documentation for the shift scheduling API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shift Scheduler",
        version = "0.1.0",
        description = "Roles, employees, shifts, availability windows and preferences"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        role_handler::add_role,
        role_handler::get_roles,
        shift_handler::add_shift,
        shift_handler::get_shifts,
        employee_handler::add_employee,
        employee_handler::get_employees,
        availability_handler::add_availability,
        availability_handler::get_availability,
        availability_handler::get_employee_availability,
        preference_handler::add_preference,
        preference_handler::get_preferences,
        preference_handler::get_employee_preferences,
    ),
    components(
        schemas(
            Role,
            Employee,
            Shift,
            Availability,
            Preference,
            role_handler::CreateRoleRequest,
            employee_handler::CreateEmployeeRequest,
            shift_handler::CreateShiftRequest,
            availability_handler::CreateAvailabilityRequest,
            preference_handler::CreatePreferenceRequest,
        )
    ),
    tags(
        (name = "Roles", description = "Job roles shifts are staffed for"),
        (name = "Shifts", description = "Shifts and their assignment"),
        (name = "Employees", description = "Employee registry"),
        (name = "Availability", description = "Weekly availability windows"),
        (name = "Preferences", description = "Preferences over availability windows")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/roles/add",
            "/roles/get",
            "/shifts/add",
            "/shifts/get",
            "/employees/add",
            "/employees/get",
            "/availability/add",
            "/availability/get",
            "/availability/get/{employee_id}",
            "/preferences/add",
            "/preferences/get",
            "/preferences/get/{employee_id}",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
