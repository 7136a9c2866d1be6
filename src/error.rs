use std::path::PathBuf;
use thiserror::Error;

/// Error types for busyblocks
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read report {path}: {source}")]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open database {path}: {source}")]
    DatabaseOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Invalid timestamp on line {line_number}: {message} (line: {line:?})")]
    InvalidTimestamp {
        line_number: usize,
        line: String,
        message: String,
    },

    #[error("Invalid slot count on line {line_number}: {value:?}")]
    InvalidSlotCount { line_number: usize, value: String },

    #[error("Schema mismatch: expected version {expected}, found {found}")]
    SchemaMismatch { expected: u32, found: u32 },

    #[error("Not found: {resource}")]
    NotFound { resource: String },
}

impl ScheduleError {
    /// Create an invalid timestamp error for a detail row
    pub fn invalid_timestamp<S: Into<String>, M: Into<String>>(
        line_number: usize,
        line: S,
        message: M,
    ) -> Self {
        Self::InvalidTimestamp {
            line_number,
            line: line.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Whether the error means the report itself broke a format assumption
    pub fn is_format_violation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTimestamp { .. } | Self::InvalidSlotCount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
