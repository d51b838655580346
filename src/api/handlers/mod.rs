//! HTTP request handlers.

pub mod availability_handler;
pub mod employee_handler;
pub mod preference_handler;
pub mod role_handler;
pub mod shift_handler;

pub use availability_handler::availability_routes;
pub use employee_handler::employee_routes;
pub use preference_handler::preference_routes;
pub use role_handler::role_routes;
pub use shift_handler::shift_routes;
