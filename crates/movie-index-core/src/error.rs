//! Error types for the movie index.
//!
//! Malformed catalog lines are not errors: they are dropped during load and
//! reported through [`crate::catalog::RecordRejection`]. The variants here cover
//! configuration, backend selection, and user-supplied query text.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the movie index.
#[derive(Debug, Error)]
pub enum MovieIndexError {
    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid backend: {0}")]
    InvalidBackend(String),

    // Validation errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },
}

/// Result type alias for movie index operations.
pub type Result<T> = std::result::Result<T, MovieIndexError>;

impl From<std::io::Error> for MovieIndexError {
    fn from(err: std::io::Error) -> Self {
        MovieIndexError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for MovieIndexError {
    fn from(err: serde_json::Error) -> Self {
        MovieIndexError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl MovieIndexError {
    /// Create an IO error with path context.
    ///
    /// A missing file is reported as [`MovieIndexError::FileNotFound`].
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            return MovieIndexError::FileNotFound(path);
        }
        MovieIndexError::Io {
            message: err.to_string(),
            path: Some(path),
            source: Some(err),
        }
    }

    /// Create a validation error for a named input field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MovieIndexError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
