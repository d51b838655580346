//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Table and column names follow the store's PascalCase layout.

pub mod availability;
pub mod employee;
pub mod preference;
pub mod role;
pub mod shift;
