//! Shift domain entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::{AppError, AppResult};

/// A shift to be staffed for a role, optionally already assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Shift {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub role_id: i32,
    #[schema(example = "Morning registers")]
    pub description: Option<String>,
    #[schema(example = "2024-01-01T09:00:00")]
    pub start_time: NaiveDateTime,
    #[schema(example = "2024-01-01T17:00:00")]
    pub end_time: NaiveDateTime,
    /// Assigned employee, if any
    pub employee_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Start/end pair with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ShiftWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<Self> {
        if start >= end {
            return Err(AppError::validation("Start time must be before end time."));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Validated input for a new shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShift {
    pub role_id: i32,
    pub description: Option<String>,
    pub window: ShiftWindow,
    pub employee_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_window_accepts_ordered_times() {
        let window = ShiftWindow::new(at("2024-01-01T09:00:00"), at("2024-01-01T17:00:00")).unwrap();
        assert!(window.start() < window.end());
    }

    #[test]
    fn test_window_rejects_reversed_times() {
        let err = ShiftWindow::new(at("2024-01-01T17:00:00"), at("2024-01-01T09:00:00")).unwrap_err();
        assert_eq!(err.to_string(), "Start time must be before end time.");
    }

    #[test]
    fn test_window_rejects_zero_length() {
        let t = at("2024-01-01T09:00:00");
        assert!(ShiftWindow::new(t, t).is_err());
    }

    #[test]
    fn test_window_may_cross_midnight() {
        assert!(ShiftWindow::new(at("2024-01-01T22:00:00"), at("2024-01-02T06:00:00")).is_ok());
    }
}
