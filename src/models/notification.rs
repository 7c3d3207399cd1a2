//! Notification models.
//!
//! This module provides the data models for the notification archive:
//! the channel enum, the record built after a successful send, and the
//! archived record carrying its store-assigned id.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ============================================================================
// Enums
// ============================================================================

/// Channel type for notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    Email,
    Sms,
    Push,
}

impl ChannelType {
    /// All supported channels, in menu order
    pub const ALL: [ChannelType; 3] = [ChannelType::Sms, ChannelType::Email, ChannelType::Push];

    /// Human-readable label, also stored as `Notification::channel`
    pub fn label(&self) -> &'static str {
        match self {
            ChannelType::Email => "Email",
            ChannelType::Sms => "SMS",
            ChannelType::Push => "Push",
        }
    }

    /// Lowercase token accepted on input
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Email => "email",
            ChannelType::Sms => "sms",
            ChannelType::Push => "push",
        }
    }

    /// Whether a send on this channel needs an explicit target
    pub fn requires_target(&self) -> bool {
        !matches!(self, ChannelType::Push)
    }
}

impl FromStr for ChannelType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        ChannelType::ALL
            .into_iter()
            .find(|channel| channel.as_str() == token)
            .ok_or_else(|| AppError::UnsupportedChannel {
                value: s.trim().to_string(),
            })
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Notification Models
// ============================================================================

/// Archived notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub channel: String,
    pub target: Option<String>,
    pub message: String,
    pub timestamp: Timestamp,
}

/// Notification that has been sent but not yet archived
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub channel: String,
    pub target: Option<String>,
    pub message: String,
    pub timestamp: Timestamp,
}

impl NewNotification {
    /// Build a record for a send that succeeded just now
    pub fn sent_now(channel: &str, target: Option<&str>, message: &str) -> Self {
        Self {
            channel: channel.to_string(),
            target: target.map(str::to_string),
            message: message.to_string(),
            timestamp: Timestamp::now(),
        }
    }

    /// Attach the store-assigned id
    pub fn into_notification(self, id: u64) -> Notification {
        Notification {
            id,
            channel: self.channel,
            target: self.target,
            message: self.message,
            timestamp: self.timestamp,
        }
    }
}
