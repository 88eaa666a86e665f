//! Error types for planes.
//!
//! This module defines all error types used throughout the planes crate,
//! keeping the different ways a data file can fail to load apart so callers
//! can decide how to react.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for planes operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// The data file does not exist.
    #[error("data file {path} does not exist")]
    StoreMissing {
        /// Path to the data file.
        path: PathBuf,
    },

    /// The data file exists but could not be read.
    #[error("failed to read data file {path}: {source}")]
    StoreRead {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a JSON array of plane records.
    #[error("data file {path} is corrupt: {source}")]
    StoreCorrupt {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The data file could not be written.
    #[error("failed to write data file {path}: {source}")]
    StoreWrite {
        /// Path to the data file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The user's home directory could not be determined.
    #[error("cannot determine the home directory")]
    HomeDirUnavailable,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Logging Errors ===
    /// Failed to open the log file.
    #[error("failed to open log file {path}: {source}")]
    LogFileOpen {
        /// Path to the log file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for planes operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the data file is simply absent.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::StoreMissing { .. })
    }

    /// Check if this error means the data file exists but is unusable.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::StoreCorrupt { .. } | Self::StoreRead { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<Vec<i32>>("not valid json").unwrap_err()
    }

    #[test]
    fn test_error_display() {
        let err = Error::HomeDirUnavailable;
        assert_eq!(err.to_string(), "cannot determine the home directory");

        let err = Error::config_validation("bad value");
        assert_eq!(err.to_string(), "invalid configuration: bad value");
    }

    #[test]
    fn test_store_missing_display() {
        let err = Error::StoreMissing {
            path: PathBuf::from("/home/user/planes.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/home/user/planes.json"));
        assert!(msg.contains("does not exist"));
    }

    #[test]
    fn test_is_missing() {
        let err = Error::StoreMissing {
            path: PathBuf::from("planes.json"),
        };
        assert!(err.is_missing());
        assert!(!err.is_corrupt());
        assert!(!Error::HomeDirUnavailable.is_missing());
    }

    #[test]
    fn test_is_corrupt() {
        let err = Error::StoreCorrupt {
            path: PathBuf::from("planes.json"),
            source: json_error(),
        };
        assert!(err.is_corrupt());
        assert!(!err.is_missing());

        let err = Error::StoreRead {
            path: PathBuf::from("planes.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_corrupt());
    }

    #[test]
    fn test_store_write_display() {
        let err = Error::StoreWrite {
            path: PathBuf::from("/readonly/planes.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/readonly/planes.json"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_log_file_open_display() {
        let err = Error::LogFileOpen {
            path: PathBuf::from("/var/log/planes.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(err.to_string().contains("/var/log/planes.log"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let err: Error = json_error().into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }
}
