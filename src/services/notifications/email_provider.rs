//! Email notification provider implementation.

use super::provider::{NotificationProvider, NotificationReceipt};
use crate::error::{AppError, AppResult};

/// Email provider
///
/// A target is accepted as long as it contains `@`; local part and
/// domain are not checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailProvider;

impl EmailProvider {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationProvider for EmailProvider {
    fn send(&self, target: &str, message: &str) -> AppResult<NotificationReceipt> {
        if !target.contains('@') {
            return Err(AppError::invalid_target(self.name(), "invalid email address"));
        }

        Ok(NotificationReceipt {
            channel: self.name(),
            confirmation: format!("[EMAIL] Sending '{}' to {} succeeded ✅", message, target),
        })
    }

    fn name(&self) -> &'static str {
        "Email"
    }
}
