//! Domain layer - Core scheduling entities and value objects
//!
//! Each entity comes in two shapes: the stored record (with its
//! store-assigned id and timestamps) and a `New*` input whose constructor
//! enforces the field-level rules before anything touches the store.

pub mod availability;
pub mod email;
pub mod employee;
pub mod preference;
pub mod role;
pub mod shift;

pub use availability::{Availability, ClockTime, NewAvailability};
pub use email::Email;
pub use employee::{Employee, NewEmployee};
pub use preference::{NewPreference, Preference};
pub use role::{NewRole, Role};
pub use shift::{NewShift, Shift, ShiftWindow};
