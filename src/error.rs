//! Error types for api2ts.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for api2ts operations.
#[derive(Debug, Error)]
pub enum Api2tsError {
    /// A URL, type name or path failed validation.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The API could not be reached or answered with a non-success status.
    #[error("API request failed: {0}")]
    Fetch(String),

    /// The response body was not valid JSON.
    #[error("Response is not valid JSON: {0}")]
    Parse(String),

    /// Inference produced no declarations for the sample.
    #[error("Generated type is empty, check the data returned by the API")]
    EmptyResult,

    /// Creating the target directory or writing the file failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Terminal interaction failed.
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// The settings file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Api2tsError {
    /// Create a validation error for the given field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Create a write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for Api2tsError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

impl From<dialoguer::Error> for Api2tsError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

/// Result type alias for api2ts operations.
pub type Result<T> = std::result::Result<T, Api2tsError>;
