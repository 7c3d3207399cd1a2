//! Notification system with pluggable providers.
//!
//! The core trait `NotificationProvider` has one implementation per
//! channel (email, SMS, push). Sending is simulated: each provider only
//! validates its target and produces a confirmation line.

mod email_provider;
mod provider;
mod push_provider;
mod sms_provider;

pub mod notification_service;

pub use email_provider::EmailProvider;
pub use notification_service::{NotificationService, SendOutcome};
pub use provider::{NotificationProvider, NotificationReceipt};
pub use push_provider::PushProvider;
pub use sms_provider::{DEFAULT_SMS_PREFIX, SmsProvider};
