//! Notification service shared by both front ends.
//!
//! Resolves a channel to its provider, performs the send, and archives the
//! notification only when the send succeeded.

use super::email_provider::EmailProvider;
use super::provider::{NotificationProvider, NotificationReceipt};
use super::push_provider::PushProvider;
use super::sms_provider::SmsProvider;
use crate::config::settings::NotificationsConfig;
use crate::error::AppResult;
use crate::models::{ChannelType, NewNotification, Notification};
use crate::repositories::NotificationStore;

/// Outcome of a successful send
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub receipt: NotificationReceipt,
    pub notification: Notification,
}

/// Notification service owning the archive it writes to
#[derive(Debug)]
pub struct NotificationService<S: NotificationStore> {
    store: S,
    sms_prefix: String,
}

impl<S: NotificationStore> NotificationService<S> {
    /// Creates a new NotificationService
    ///
    /// # Arguments
    /// * `store` - Archive for successfully sent notifications
    /// * `config` - Provider settings
    pub fn new(store: S, config: &NotificationsConfig) -> Self {
        Self {
            store,
            sms_prefix: config.sms_prefix.clone(),
        }
    }

    /// Sends a notification and archives it on success
    ///
    /// The timestamp is taken after the provider accepted the target, so it
    /// records when the send succeeded rather than when it was attempted.
    ///
    /// # Arguments
    /// * `channel` - Channel to send on
    /// * `target` - Destination; `None` for implicit-target channels
    /// * `message` - Notification body
    ///
    /// # Returns
    /// The provider receipt and the archived notification. On a validation
    /// failure the error is returned and the archive is left untouched.
    pub fn send(
        &mut self,
        channel: ChannelType,
        target: Option<&str>,
        message: &str,
    ) -> AppResult<SendOutcome> {
        let provider = self.create_provider(channel);
        let target = if channel.requires_target() { target } else { None };

        tracing::debug!(channel = provider.name(), ?target, "Sending notification");
        let receipt = provider.send(target.unwrap_or_default(), message).inspect_err(|e| {
            tracing::warn!(channel = provider.name(), error = %e, "Send rejected");
        })?;

        let notification = self
            .store
            .add(NewNotification::sent_now(provider.name(), target, message))?;
        tracing::info!(
            id = notification.id,
            channel = %notification.channel,
            "Notification sent and archived"
        );

        Ok(SendOutcome {
            receipt,
            notification,
        })
    }

    /// All archived notifications in id order
    pub fn history(&self) -> AppResult<Vec<Notification>> {
        self.store.get_all()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a provider instance for a channel
    ///
    /// The channel set is closed, so every variant maps to a provider.
    pub fn create_provider(&self, channel: ChannelType) -> Box<dyn NotificationProvider> {
        match channel {
            ChannelType::Email => Box::new(EmailProvider::new()),
            ChannelType::Sms => Box::new(SmsProvider::new(self.sms_prefix.clone())),
            ChannelType::Push => Box::new(PushProvider::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::repositories::MemoryNotificationStore;

    fn service() -> NotificationService<MemoryNotificationStore> {
        NotificationService::new(MemoryNotificationStore::new(), &NotificationsConfig::default())
    }

    #[test]
    fn test_email_send_is_archived() {
        let mut service = service();
        let outcome = service
            .send(ChannelType::Email, Some("a@b.com"), "Hi")
            .unwrap();

        assert_eq!(outcome.notification.id, 1);
        assert_eq!(outcome.notification.channel, "Email");
        assert_eq!(outcome.notification.target.as_deref(), Some("a@b.com"));
        assert_eq!(outcome.notification.message, "Hi");
        assert_eq!(service.history().unwrap(), vec![outcome.notification]);
    }

    #[test]
    fn test_failed_send_is_not_archived() {
        let mut service = service();
        let err = service
            .send(ChannelType::Sms, Some("0711111111"), "Hi")
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidTarget { channel: "SMS", .. }));
        assert!(service.history().unwrap().is_empty());
    }

    #[test]
    fn test_missing_target_fails_for_email() {
        let mut service = service();
        assert!(service.send(ChannelType::Email, None, "Hi").is_err());
        assert!(service.store().is_empty());
    }

    #[test]
    fn test_push_drops_target() {
        let mut service = service();
        let outcome = service
            .send(ChannelType::Push, Some("ignored"), "Hi")
            .unwrap();
        assert_eq!(outcome.notification.channel, "Push");
        assert!(outcome.notification.target.is_none());
    }

    #[test]
    fn test_failure_does_not_consume_an_id() {
        let mut service = service();
        service.send(ChannelType::Email, Some("a@b.com"), "1").unwrap();
        service.send(ChannelType::Sms, Some("0711111111"), "2").unwrap_err();
        let outcome = service.send(ChannelType::Push, None, "3").unwrap();
        assert_eq!(outcome.notification.id, 2);
    }

    #[test]
    fn test_sms_prefix_from_config() {
        let config = NotificationsConfig {
            sms_prefix: "07".to_string(),
        };
        let mut service = NotificationService::new(MemoryNotificationStore::new(), &config);
        assert!(service.send(ChannelType::Sms, Some("0711111111"), "Hi").is_ok());
    }

    #[test]
    fn test_create_provider_names() {
        let service = service();
        for channel in ChannelType::ALL {
            assert_eq!(service.create_provider(channel).name(), channel.label());
        }
    }
}
