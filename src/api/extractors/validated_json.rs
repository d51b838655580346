//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// JSON body that has been deserialized and passed its `validator` rules.
///
/// Malformed JSON, missing fields and wrong field types become
/// `AppError::BadRequest`; failed field rules become `AppError::Validation`.
/// Bodies that declare no field rules pass straight through to the domain
/// constructors, which hold the remaining checks.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// `{employee_id}` path segment, rejected with the JSON error envelope.
pub struct EmployeeIdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EmployeeIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(employee_id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| AppError::bad_request(e.body_text()))?;

        Ok(EmployeeIdPath(employee_id))
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Slot {
        #[validate(range(min = 0, max = 6, message = "Day of week must be between 0 and 6."))]
        day_of_week: i32,
        #[validate(range(min = 1))]
        employee_id: i32,
    }

    #[test]
    fn test_format_uses_custom_message() {
        let errors = Slot {
            day_of_week: 7,
            employee_id: 1,
        }
        .validate()
        .unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            "Day of week must be between 0 and 6."
        );
    }

    #[test]
    fn test_format_falls_back_to_field_name() {
        let errors = Slot {
            day_of_week: 1,
            employee_id: 0,
        }
        .validate()
        .unwrap_err();

        assert_eq!(format_validation_errors(&errors), "employee_id is invalid");
    }
}
