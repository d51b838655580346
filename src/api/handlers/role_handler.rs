//! Role handlers.

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
use crate::domain::Role;
use crate::errors::AppResult;

/// Role creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoleRequest {
    /// Unique role name; surrounding whitespace is ignored
    #[schema(example = "Cashier")]
    pub name: String,
    #[schema(example = "Runs the front registers")]
    pub description: Option<String>,
}

/// Create role routes
pub fn role_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_role))
        .route("/get", get(get_roles))
}

/// Create a role
#[utoipa::path(
    post,
    path = "/roles/add",
    tag = "Roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = Role),
        (status = 400, description = "Blank or duplicate name"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn add_role(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRoleRequest>,
) -> AppResult<(StatusCode, Json<Role>)> {
    let role = state
        .role_service
        .create_role(payload.name, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(role)))
}

/// List all roles
#[utoipa::path(
    get,
    path = "/roles/get",
    tag = "Roles",
    responses(
        (status = 200, description = "All roles", body = Vec<Role>),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn get_roles(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    let roles = state.role_service.list_roles().await?;
    Ok(Json(roles))
}
