//! Employee availability windows.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::CLOCK_TIME_FORMAT;
use crate::errors::{AppError, AppResult};

/// A weekly window during which an employee can work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Availability {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub employee_id: i32,
    /// 0 = Monday .. 6 = Sunday
    #[schema(example = 0, minimum = 0, maximum = 6)]
    pub day_of_week: i32,
    #[schema(value_type = String, example = "09:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "17:00:00")]
    pub end_time: NaiveTime,
}

/// Wall-clock time truncated to whole seconds.
///
/// Stored and compared in its canonical `HH:MM:SS` form, so `09:00` and
/// `09:00:00.250` name the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }

    /// Parse the canonical form read back from the store.
    pub fn parse(raw: &str) -> AppResult<Self> {
        NaiveTime::parse_from_str(raw, CLOCK_TIME_FORMAT)
            .or_else(|_| raw.parse::<NaiveTime>())
            .map(Self::new)
            .map_err(|e| AppError::internal(format!("Invalid stored time {raw:?}: {e}")))
    }

    pub fn canonical(&self) -> String {
        self.0.format(CLOCK_TIME_FORMAT).to_string()
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self::new(time)
    }
}

/// Validated input for a new availability window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAvailability {
    pub employee_id: i32,
    pub day_of_week: i32,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form_drops_fraction() {
        let time = NaiveTime::from_hms_milli_opt(9, 0, 0, 250).unwrap();
        assert_eq!(ClockTime::new(time).canonical(), "09:00:00");
    }

    #[test]
    fn test_equal_after_normalization() {
        let a = ClockTime::new(NaiveTime::from_hms_milli_opt(17, 30, 0, 999).unwrap());
        let b = ClockTime::new(NaiveTime::from_hms_opt(17, 30, 0).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_round_trips_canonical_text() {
        let time = ClockTime::parse("08:15:00").unwrap();
        assert_eq!(time.time(), NaiveTime::from_hms_opt(8, 15, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ClockTime::parse("quarter past eight").is_err());
    }
}
