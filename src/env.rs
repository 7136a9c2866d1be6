//! Environment variable constants used throughout the application
//!
//! This module centralizes all environment variable names to ensure consistency
//! and make it easier to manage configuration across the codebase.

/// Logging configuration
pub mod logging {
    /// Log level configuration (e.g., "debug", "info", "warn", "error")
    pub const LOG_LEVEL: &str = "BUSYBLOCKS_LOG_LEVEL";

    /// Log file path for file-based logging
    pub const LOG_FILE: &str = "BUSYBLOCKS_LOG_FILE";

    /// Disable colored output (follows the NO_COLOR standard)
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Input and output locations
pub mod paths {
    /// Path of the .LST schedule report to ingest
    pub const LST_PATH: &str = "BUSYBLOCKS_LST";

    /// Path of the SQLite database written by `ingest`
    pub const DB_PATH: &str = "BUSYBLOCKS_DB";
}
