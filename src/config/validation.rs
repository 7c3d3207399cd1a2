//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{
    DemoConfig, FileSettings, LoggerSettings, NotificationsConfig, Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl FileSettings {
    /// Validate file settings
    fn validate(&self) -> Result<(), ConfigError> {
        // If file logging is enabled, path must not be empty
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        self.file.validate()?;

        Ok(())
    }
}

impl NotificationsConfig {
    /// Validate provider settings
    ///
    /// # Validation Rules
    /// - SMS prefix must be non-empty and made of ASCII digits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sms_prefix.is_empty() {
            return Err(ConfigError::validation(
                "notifications.sms_prefix",
                "SMS prefix cannot be empty.",
            ));
        }

        if !self.sms_prefix.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::ValidationError {
                field: "notifications.sms_prefix".to_string(),
                message: format!("SMS prefix must only contain digits, got '{}'", self.sms_prefix),
            });
        }

        Ok(())
    }
}

impl DemoConfig {
    /// Validate demo settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.message.trim().is_empty() {
            return Err(ConfigError::validation(
                "demo.message",
                "Demo message cannot be empty.",
            ));
        }
        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logger.validate()?;
        self.notifications.validate()?;
        self.demo.validate()?;
        Ok(())
    }
}
