//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A loaded value is out of range or inconsistent with another one
    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Unknown environment '{value}', expected development, test, staging or production")]
    UnknownEnvironment { value: String },

    /// Two configuration sources that exclude each other were both given
    #[error("{first} and {second} cannot both be set")]
    ConflictingSources {
        first: &'static str,
        second: &'static str,
    },

    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
