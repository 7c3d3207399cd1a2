//! SMS notification provider implementation.

use super::provider::{NotificationProvider, NotificationReceipt};
use crate::error::{AppError, AppResult};

/// Prefix every accepted phone number must start with
pub const DEFAULT_SMS_PREFIX: &str = "06";

/// SMS provider
///
/// Accepts numbers that start with the configured prefix (`06` by default).
#[derive(Debug, Clone)]
pub struct SmsProvider {
    prefix: String,
}

impl SmsProvider {
    /// Creates a new SMS provider
    ///
    /// # Arguments
    /// * `prefix` - Required leading digits of a valid number
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for SmsProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SMS_PREFIX)
    }
}

impl NotificationProvider for SmsProvider {
    fn send(&self, target: &str, message: &str) -> AppResult<NotificationReceipt> {
        // starts_with also rejects targets shorter than the prefix
        if !target.starts_with(self.prefix.as_str()) {
            return Err(AppError::invalid_target(
                self.name(),
                format!("invalid phone number: must start with '{}'", self.prefix),
            ));
        }

        Ok(NotificationReceipt {
            channel: self.name(),
            confirmation: format!("[SMS] Sending '{}' to {} succeeded ✅", message, target),
        })
    }

    fn name(&self) -> &'static str {
        "SMS"
    }
}
