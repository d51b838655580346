//! Employee handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::Employee;
use crate::errors::AppResult;

/// Employee creation request
///
/// Email shape is checked by the domain so that the message matches across
/// every entry point.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, message = "The name must not be empty."))]
    #[schema(example = "Jane")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = 1)]
    pub role_id: Option<i32>,
}

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_employee))
        .route("/get", get(get_employees))
}

/// Register an employee
#[utoipa::path(
    post,
    path = "/employees/add",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid name or email, email taken, or unknown role"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn add_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let employee = state
        .employee_service
        .create_employee(payload.name, payload.email, payload.role_id)
        .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees/get",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees))
}
