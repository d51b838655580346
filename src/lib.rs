//! Shift Scheduler - CRUD service for staff scheduling data
//!
//! Records roles, employees, shifts, weekly availability windows and
//! preferences over those windows in a single SQLite file, and exposes
//! them over HTTP.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and their validated inputs
//! - **services**: Use cases and store-side rules
//! - **infra**: Connection factory, schema, repositories, unit of work
//! - **api**: HTTP handlers, middleware, and routes
//! - **utils**: Logging setup
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Create the schema and exit
//! cargo run -- init-db
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::Database;
