//! Employee domain entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Email;
use crate::errors::{AppError, AppResult};

/// Employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Jane")]
    pub name: String,
    /// Unique email address
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Primary role, if any
    #[schema(example = 1)]
    pub role_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated input for a new employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    name: String,
    email: Email,
    role_id: Option<i32>,
}

impl NewEmployee {
    /// Build an employee input. The name must not be empty and is stored
    /// as given; the email must be shaped like `local@domain.tld`.
    pub fn new(name: &str, email: &str, role_id: Option<i32>) -> AppResult<Self> {
        if name.is_empty() {
            return Err(AppError::validation("The name must not be empty."));
        }
        let email = Email::parse(email)?;

        Ok(Self {
            name: name.to_string(),
            email,
            role_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn role_id(&self) -> Option<i32> {
        self.role_id
    }
}
