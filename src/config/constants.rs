//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default store location: a single SQLite file, created on first use
pub const DEFAULT_DATABASE_URL: &str = "sqlite://scheduling.db?mode=rwc";

/// Detail returned when the store cannot be opened
pub const CONNECTION_FAILED_MESSAGE: &str = "Could not connect to the database.";

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Size at which the log file is truncated (10 MiB)
pub const DEFAULT_LOG_MAX_BYTES: u64 = 10 * 1024 * 1024;

// =============================================================================
// Validation
// =============================================================================

/// Canonical wall-clock format for availability windows
pub const CLOCK_TIME_FORMAT: &str = "%H:%M:%S";

// =============================================================================
// Store locking
// =============================================================================

/// How long a connection waits on a locked store before giving up
pub const SQLITE_BUSY_TIMEOUT_MS: u64 = 5000;
