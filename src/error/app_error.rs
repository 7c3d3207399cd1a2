use thiserror::Error;

use crate::config::error::ConfigError;
use crate::logger::LoggerError;

/// Application-wide error type.
///
/// The first three variants are recoverable: the front ends print them and
/// carry on. Everything else is propagated up to `main`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Target does not match the channel's required format
    #[error("{reason}")]
    InvalidTarget {
        channel: &'static str,
        reason: String,
    },

    /// Requested channel type matches no known provider
    #[error("Unsupported type: {value}")]
    UnsupportedChannel { value: String },

    /// Menu input matches none of the defined actions
    #[error("Invalid choice: {value}")]
    UnrecognizedMenuChoice { value: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Reading from stdin or writing to stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Build an `InvalidTarget` error for the given channel
    pub fn invalid_target(channel: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidTarget {
            channel,
            reason: reason.into(),
        }
    }

    /// Whether a front end should report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidTarget { .. }
                | AppError::UnsupportedChannel { .. }
                | AppError::UnrecognizedMenuChoice { .. }
        )
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::from(error),
        }
    }
}

impl From<LoggerError> for AppError {
    fn from(error: LoggerError) -> Self {
        AppError::Configuration {
            key: "logger".to_string(),
            source: anyhow::Error::from(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
