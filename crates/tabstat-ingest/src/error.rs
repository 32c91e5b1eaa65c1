//! Error types for configuration loading and table reading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading inputs.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Configuration Errors ===
    /// Configuration document could not be read.
    #[error("failed to read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration document is not valid JSON.
    #[error("failed to parse configuration {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Top level of the configuration document is not an object.
    #[error("configuration {path} must be an object keyed by dataset")]
    ConfigNotAnObject { path: PathBuf },

    /// Entry has no `columns` list.
    #[error("entry '{key}' has no columns")]
    MissingColumns { key: String },

    /// Entry is missing a required key or has a value of the wrong type.
    #[error("entry '{key}' is invalid: {message}")]
    InvalidEntry { key: String, message: String },

    // === Table Errors ===
    /// Table file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Table file could not be opened or read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table file has no lines.
    #[error("no data read from {path}")]
    EmptyFile { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /data/missing.csv");

        let err = IngestError::MissingColumns {
            key: "weather".to_string(),
        };
        assert_eq!(err.to_string(), "entry 'weather' has no columns");
    }
}
