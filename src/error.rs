//! Custom error types for garden-backup
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for garden-backup operations
#[derive(Error, Debug)]
pub enum BackupError {
    /// Configuration-related errors (path resolution, invalid layout)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// SQLite errors raised while snapshotting the database
    #[error("Database error: {0}")]
    Database(String),

    /// A copy destination already exists where the copy primitive expects
    /// a fresh path; fatal for the current run, never retried
    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),
}

impl BackupError {
    /// Check if this is a destination-collision error
    pub fn is_destination_exists(&self) -> bool {
        matches!(self, Self::DestinationExists(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BackupError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<rusqlite::Error> for BackupError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Result type alias for garden-backup operations
pub type BackupResult<T> = Result<T, BackupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackupError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_destination_exists_error() {
        let err = BackupError::DestinationExists(PathBuf::from("/tmp/dest"));
        assert_eq!(err.to_string(), "Destination already exists: /tmp/dest");
        assert!(err.is_destination_exists());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let backup_err: BackupError = io_err.into();
        assert!(matches!(backup_err, BackupError::Io(_)));
    }
}
