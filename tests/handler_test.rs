//! Handler tests against stub services.
//!
//! No store is involved: the services below return canned values so the
//! tests pin down request parsing, status codes and the error envelope.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{NaiveDateTime, NaiveTime};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use shift_scheduler::api::{create_router, AppState};
use shift_scheduler::domain::{Availability, Employee, NewPreference, Preference, Role, Shift};
use shift_scheduler::errors::{AppError, AppResult};
use shift_scheduler::infra::Database;
use shift_scheduler::services::{
    AvailabilityService, EmployeeService, PreferenceService, RoleService, ServiceContainer,
    ShiftRequest, ShiftService,
};

// =============================================================================
// Stub Services
// =============================================================================

/// Records what the handlers passed in and answers with fixed data
#[derive(Default)]
struct StubServices {
    last_shift: Mutex<Option<ShiftRequest>>,
    last_employee_filter: Mutex<Option<i32>>,
}

fn epoch() -> NaiveDateTime {
    NaiveDateTime::default()
}

#[async_trait]
impl RoleService for StubServices {
    async fn create_role(&self, name: String, description: Option<String>) -> AppResult<Role> {
        if name == "boom" {
            return Err(AppError::from(sea_orm::DbErr::Custom(
                "UNIQUE constraint failed: Roles.RoleName".into(),
            )));
        }
        Ok(Role {
            id: 7,
            name,
            description,
            created_at: epoch(),
            updated_at: epoch(),
        })
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(vec![])
    }
}

#[async_trait]
impl EmployeeService for StubServices {
    async fn create_employee(
        &self,
        _name: String,
        _email: String,
        _role_id: Option<i32>,
    ) -> AppResult<Employee> {
        Err(AppError::Connection)
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        Err(AppError::internal("disk on fire"))
    }
}

#[async_trait]
impl ShiftService for StubServices {
    async fn create_shift(&self, request: ShiftRequest) -> AppResult<Shift> {
        let shift = Shift {
            id: 1,
            role_id: request.role_id,
            description: request.description.clone(),
            start_time: request.start_time,
            end_time: request.end_time,
            employee_id: request.employee_id,
            created_at: epoch(),
            updated_at: epoch(),
        };
        *self.last_shift.lock().unwrap() = Some(request);
        Ok(shift)
    }

    async fn list_shifts(&self) -> AppResult<Vec<Shift>> {
        Ok(vec![])
    }
}

#[async_trait]
impl AvailabilityService for StubServices {
    async fn create_availability(
        &self,
        employee_id: i32,
        day_of_week: i32,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AppResult<Availability> {
        Ok(Availability {
            id: 1,
            employee_id,
            day_of_week,
            start_time,
            end_time,
        })
    }

    async fn list_availability(&self) -> AppResult<Vec<Availability>> {
        Ok(vec![])
    }

    async fn list_availability_for_employee(
        &self,
        employee_id: i32,
    ) -> AppResult<Vec<Availability>> {
        *self.last_employee_filter.lock().unwrap() = Some(employee_id);
        Ok(vec![])
    }
}

#[async_trait]
impl PreferenceService for StubServices {
    async fn create_preference(&self, preference: NewPreference) -> AppResult<Preference> {
        Ok(Preference {
            id: 1,
            employee_id: preference.employee_id,
            availability_id: preference.availability_id,
            preference_level: preference.preference_level,
        })
    }

    async fn list_preferences(&self) -> AppResult<Vec<Preference>> {
        Ok(vec![])
    }

    async fn list_preferences_for_employee(
        &self,
        _employee_id: i32,
    ) -> AppResult<Vec<Preference>> {
        Ok(vec![])
    }
}

struct StubContainer(Arc<StubServices>);

impl ServiceContainer for StubContainer {
    fn roles(&self) -> Arc<dyn RoleService> {
        self.0.clone()
    }

    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.0.clone()
    }

    fn shifts(&self) -> Arc<dyn ShiftService> {
        self.0.clone()
    }

    fn availability(&self) -> Arc<dyn AvailabilityService> {
        self.0.clone()
    }

    fn preferences(&self) -> Arc<dyn PreferenceService> {
        self.0.clone()
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn router(stubs: Arc<StubServices>) -> axum::Router {
    let state = AppState::new(
        &StubContainer(stubs),
        Arc::new(Database::new("sqlite::memory:")),
    );
    create_router(state)
}

async fn call(router: axum::Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint_returns_welcome_message() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router(Arc::default()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("shift scheduling"));
}

#[tokio::test]
async fn test_create_role_returns_created_entity() {
    let (status, body) = call(
        router(Arc::default()),
        "POST",
        "/roles/add",
        r#"{"name":"Cashier","description":"Front"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 7);
    assert_eq!(body["description"], "Front");
}

#[tokio::test]
async fn test_storage_error_is_client_error_with_store_message() {
    let (status, body) = call(
        router(Arc::default()),
        "POST",
        "/roles/add",
        r#"{"name":"boom"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("UNIQUE constraint failed"));
}

#[tokio::test]
async fn test_connection_error_is_server_error() {
    let (status, body) = call(
        router(Arc::default()),
        "POST",
        "/employees/add",
        r#"{"name":"Jane","email":"jane@x.com"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"]["message"],
        "Could not connect to the database."
    );
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let (status, body) = call(router(Arc::default()), "GET", "/employees/get", "").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert!(!body["error"]["message"].as_str().unwrap().contains("fire"));
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, body) = call(router(Arc::default()), "POST", "/roles/add", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_shift_request_fields_reach_service() {
    let stubs = Arc::new(StubServices::default());
    let (status, body) = call(
        router(stubs.clone()),
        "POST",
        "/shifts/add",
        r#"{"role_id":2,"start_time":"2024-03-01T06:00:00","end_time":"2024-03-01T14:00:00","employee_id":5}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["end_time"], "2024-03-01T14:00:00");

    let seen = stubs.last_shift.lock().unwrap().clone().unwrap();
    assert_eq!(seen.role_id, 2);
    assert_eq!(seen.employee_id, Some(5));
    assert!(seen.description.is_none());
}

#[tokio::test]
async fn test_bad_time_format_is_bad_request() {
    let (status, _) = call(
        router(Arc::default()),
        "POST",
        "/availability/add",
        r#"{"employee_id":1,"day_of_week":1,"start_time":"nine","end_time":"17:00:00"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_negative_day_of_week_is_validation_error() {
    let (status, body) = call(
        router(Arc::default()),
        "POST",
        "/availability/add",
        r#"{"employee_id":1,"day_of_week":-1,"start_time":"09:00:00","end_time":"17:00:00"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_empty_employee_name_rejected_before_service() {
    let (status, body) = call(
        router(Arc::default()),
        "POST",
        "/employees/add",
        r#"{"name":"","email":"jane@x.com"}"#,
    )
    .await;

    // The stub service would answer 500, so a 400 means the body rule ran first
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "The name must not be empty.");
}

#[tokio::test]
async fn test_employee_filter_comes_from_path() {
    let stubs = Arc::new(StubServices::default());
    let (status, body) = call(router(stubs.clone()), "GET", "/availability/get/12", "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    assert_eq!(*stubs.last_employee_filter.lock().unwrap(), Some(12));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, body) = call(router(Arc::default()), "GET", "/api-docs/openapi.json", "").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/roles/add"].is_object());
}
