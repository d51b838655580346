//! Preference handlers.

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

use crate::api::extractors::{EmployeeIdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewPreference, Preference};
use crate::errors::AppResult;

/// Preference creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePreferenceRequest {
    #[schema(example = 1)]
    pub employee_id: i32,
    #[schema(example = 1)]
    pub availability_id: i32,
    #[schema(example = 3)]
    pub preference_level: i32,
}

/// Create preference routes
pub fn preference_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_preference))
        .route("/get", get(get_preferences))
        .route("/get/:employee_id", get(get_employee_preferences))
}

/// Record a preference for an availability window
#[utoipa::path(
    post,
    path = "/preferences/add",
    tag = "Preferences",
    request_body = CreatePreferenceRequest,
    responses(
        (status = 201, description = "Preference created", body = Preference),
        (status = 400, description = "Unknown employee or availability, or duplicate pair"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn add_preference(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePreferenceRequest>,
) -> AppResult<(StatusCode, Json<Preference>)> {
    let preference = state
        .preference_service
        .create_preference(NewPreference {
            employee_id: payload.employee_id,
            availability_id: payload.availability_id,
            preference_level: payload.preference_level,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(preference)))
}

/// List all preferences
#[utoipa::path(
    get,
    path = "/preferences/get",
    tag = "Preferences",
    responses(
        (status = 200, description = "All preferences", body = Vec<Preference>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_preferences(State(state): State<AppState>) -> AppResult<Json<Vec<Preference>>> {
    let preferences = state.preference_service.list_preferences().await?;
    Ok(Json(preferences))
}

/// List one employee's preferences
#[utoipa::path(
    get,
    path = "/preferences/get/{employee_id}",
    tag = "Preferences",
    params(("employee_id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Preferences of the employee, possibly empty", body = Vec<Preference>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_employee_preferences(
    State(state): State<AppState>,
    EmployeeIdPath(employee_id): EmployeeIdPath,
) -> AppResult<Json<Vec<Preference>>> {
    let preferences = state
        .preference_service
        .list_preferences_for_employee(employee_id)
        .await?;

    Ok(Json(preferences))
}
