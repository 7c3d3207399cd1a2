//! Repository layer for the notification archive.

mod notification_store;

pub use notification_store::{MemoryNotificationStore, NotificationStore};
