//! Append-only notification archive.
//!
//! The store is the sole long-term owner of archived notifications. It
//! assigns ids and keeps insertion order; there is no update or delete.

use crate::error::AppResult;
use crate::models::{NewNotification, Notification};

/// Trait for notification archives.
///
/// `add` takes `&mut self`: a store has exactly one writer, the service
/// that owns it.
pub trait NotificationStore {
    /// Assign the next id and append the notification
    ///
    /// # Returns
    /// The archived notification with its id
    fn add(&mut self, notification: NewNotification) -> AppResult<Notification>;

    /// All archived notifications in insertion (= id) order
    fn get_all(&self) -> AppResult<Vec<Notification>>;

    /// Number of archived notifications
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory archive, lives for the process lifetime.
#[derive(Debug)]
pub struct MemoryNotificationStore {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl MemoryNotificationStore {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryNotificationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationStore for MemoryNotificationStore {
    fn add(&mut self, notification: NewNotification) -> AppResult<Notification> {
        let id = self.next_id;
        self.next_id += 1;

        let archived = notification.into_notification(id);
        self.notifications.push(archived.clone());
        tracing::debug!(id, channel = %archived.channel, "Notification archived");

        Ok(archived)
    }

    fn get_all(&self) -> AppResult<Vec<Notification>> {
        Ok(self.notifications.clone())
    }

    fn len(&self) -> usize {
        self.notifications.len()
    }
}
