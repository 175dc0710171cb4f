//! Custom error types for snaprotate
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for snaprotate operations
#[derive(Error, Debug)]
pub enum SnapError {
    /// A backup/restore precondition was not met (missing or empty source,
    /// missing target)
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// A requested entity (snapshot, profile) does not exist
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// An external command failed or could not be spawned
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration-related errors (unreadable or malformed definition file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl SnapError {
    /// Create a "not found" error for snapshot directories
    pub fn snapshot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Snapshot",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a precondition error
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

impl From<std::io::Error> for SnapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for snaprotate operations
pub type SnapResult<T> = Result<T, SnapError>;
