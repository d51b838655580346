//! Employee preference for one of their availability windows.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How strongly an employee wants to work a given availability window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Preference {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub employee_id: i32,
    #[schema(example = 1)]
    pub availability_id: i32,
    /// Integer rank; its scale is up to the client
    #[schema(example = 3)]
    pub preference_level: i32,
}

/// Input for a new preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPreference {
    pub employee_id: i32,
    pub availability_id: i32,
    pub preference_level: i32,
}
