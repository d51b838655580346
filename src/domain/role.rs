//! Role domain entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// Job role a shift is staffed for (e.g. "Cashier")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Role {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Unique role name
    #[schema(example = "Cashier")]
    pub name: String,
    #[schema(example = "Runs the front registers")]
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Validated input for a new role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRole {
    name: String,
    description: Option<String>,
}

impl NewRole {
    /// Build a role input; the name is trimmed and must not be blank.
    pub fn new(name: &str, description: Option<String>) -> AppResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Role name must not be empty."));
        }

        Ok(Self {
            name: name.to_string(),
            description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
