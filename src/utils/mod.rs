//! Utility functions and helpers.

pub mod logger;

pub use logger::{init_tracing, TruncatingFile};
