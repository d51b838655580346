//! Shift handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::Shift;
use crate::errors::AppResult;
use crate::services::ShiftRequest;

/// Shift creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateShiftRequest {
    #[schema(example = 1)]
    pub role_id: i32,
    #[schema(example = "Morning registers")]
    pub description: Option<String>,
    #[schema(example = "2024-01-01T09:00:00")]
    pub start_time: NaiveDateTime,
    /// Must be strictly after `start_time`
    #[schema(example = "2024-01-01T17:00:00")]
    pub end_time: NaiveDateTime,
    /// Assign the shift right away
    pub employee_id: Option<i32>,
}

impl From<CreateShiftRequest> for ShiftRequest {
    fn from(req: CreateShiftRequest) -> Self {
        Self {
            role_id: req.role_id,
            description: req.description,
            start_time: req.start_time,
            end_time: req.end_time,
            employee_id: req.employee_id,
        }
    }
}

/// Create shift routes
pub fn shift_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_shift))
        .route("/get", get(get_shifts))
}

/// Create a shift
#[utoipa::path(
    post,
    path = "/shifts/add",
    tag = "Shifts",
    request_body = CreateShiftRequest,
    responses(
        (status = 201, description = "Shift created", body = Shift),
        (status = 400, description = "Unknown role or employee, or start not before end"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn add_shift(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateShiftRequest>,
) -> AppResult<(StatusCode, Json<Shift>)> {
    let shift = state.shift_service.create_shift(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(shift)))
}

/// List all shifts
#[utoipa::path(
    get,
    path = "/shifts/get",
    tag = "Shifts",
    responses(
        (status = 200, description = "All shifts", body = Vec<Shift>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_shifts(State(state): State<AppState>) -> AppResult<Json<Vec<Shift>>> {
    let shifts = state.shift_service.list_shifts().await?;
    Ok(Json(shifts))
}
