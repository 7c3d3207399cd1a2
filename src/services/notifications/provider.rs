//! Core notification provider trait and types.

use crate::error::AppResult;

/// Result of a successful (simulated) send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationReceipt {
    /// Label of the provider that sent it
    pub channel: &'static str,
    /// Channel-tagged confirmation line for the user
    pub confirmation: String,
}

/// Trait for notification providers (email, SMS, push)
///
/// # Example Implementation
/// ```ignore
/// pub struct FaxProvider;
///
/// impl NotificationProvider for FaxProvider {
///     fn send(&self, target: &str, message: &str) -> AppResult<NotificationReceipt> {
///         // Validate target, build confirmation
///     }
///
///     fn name(&self) -> &'static str {
///         "Fax"
///     }
/// }
/// ```
pub trait NotificationProvider {
    /// Validates the target and performs the simulated send
    ///
    /// # Arguments
    /// * `target` - Destination address or number; ignored by implicit-target channels
    /// * `message` - Notification body
    ///
    /// # Returns
    /// Receipt with the confirmation line, or `AppError::InvalidTarget`
    fn send(&self, target: &str, message: &str) -> AppResult<NotificationReceipt>;

    /// Returns the channel label used for display and archiving
    fn name(&self) -> &'static str;
}
