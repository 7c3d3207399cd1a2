//! Push notification provider implementation.
//!
//! Push notifications are addressed implicitly (a fixed device or topic),
//! so there is no target to validate.

use super::provider::{NotificationProvider, NotificationReceipt};
use crate::error::AppResult;

/// Push provider; every send succeeds
#[derive(Debug, Clone, Copy, Default)]
pub struct PushProvider;

impl PushProvider {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationProvider for PushProvider {
    fn send(&self, _target: &str, message: &str) -> AppResult<NotificationReceipt> {
        Ok(NotificationReceipt {
            channel: self.name(),
            confirmation: format!("[PUSH] Sending '{}' succeeded ✅", message),
        })
    }

    fn name(&self) -> &'static str {
        "Push"
    }
}
