//! Availability handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::NaiveTime;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{EmployeeIdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::Availability;
use crate::errors::AppResult;

/// Availability creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAvailabilityRequest {
    #[schema(example = 1)]
    pub employee_id: i32,
    /// 0 = Monday .. 6 = Sunday
    #[validate(range(min = 0, max = 6, message = "Day of week must be between 0 and 6."))]
    #[schema(example = 0, minimum = 0, maximum = 6)]
    pub day_of_week: i32,
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "17:00:00")]
    pub end_time: NaiveTime,
}

/// Create availability routes
pub fn availability_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_availability))
        .route("/get", get(get_availability))
        .route("/get/:employee_id", get(get_employee_availability))
}

/// Record an availability window
#[utoipa::path(
    post,
    path = "/availability/add",
    tag = "Availability",
    request_body = CreateAvailabilityRequest,
    responses(
        (status = 201, description = "Availability created", body = Availability),
        (status = 400, description = "Unknown employee or duplicate window"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn add_availability(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAvailabilityRequest>,
) -> AppResult<(StatusCode, Json<Availability>)> {
    let availability = state
        .availability_service
        .create_availability(
            payload.employee_id,
            payload.day_of_week,
            payload.start_time,
            payload.end_time,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(availability)))
}

/// List all availability windows
#[utoipa::path(
    get,
    path = "/availability/get",
    tag = "Availability",
    responses(
        (status = 200, description = "All availability windows", body = Vec<Availability>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_availability(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Availability>>> {
    let availability = state.availability_service.list_availability().await?;
    Ok(Json(availability))
}

/// List one employee's availability windows
#[utoipa::path(
    get,
    path = "/availability/get/{employee_id}",
    tag = "Availability",
    params(("employee_id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Windows of the employee, possibly empty", body = Vec<Availability>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_employee_availability(
    State(state): State<AppState>,
    EmployeeIdPath(employee_id): EmployeeIdPath,
) -> AppResult<Json<Vec<Availability>>> {
    let availability = state
        .availability_service
        .list_availability_for_employee(employee_id)
        .await?;

    Ok(Json(availability))
}
