//! Demo command handler
//!
//! Non-interactive pass over a fixed list of sends, one of which is
//! deliberately invalid, followed by a summary and the archive listing.

use std::io::Write;

use crate::cli::display::{report_send, write_history};
use crate::error::AppResult;
use crate::models::ChannelType;
use crate::repositories::NotificationStore;
use crate::services::NotificationService;

/// Channel and target of every demo send, in order
pub const DEMO_SENDS: [(ChannelType, Option<&str>); 4] = [
    (ChannelType::Email, Some("x@y.com")),
    (ChannelType::Sms, Some("0612345678")),
    (ChannelType::Sms, Some("0711111111")),
    (ChannelType::Push, None),
];

/// Counts of one demo pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoSummary {
    pub sent: usize,
    pub failed: usize,
}

/// Handler for the demo command
pub struct DemoCommandHandler<S: NotificationStore> {
    service: NotificationService<S>,
    message: String,
}

impl<S: NotificationStore> DemoCommandHandler<S> {
    /// Create a new demo handler
    ///
    /// # Arguments
    /// * `service` - Service the demo sends through
    /// * `message` - Body used for every send
    pub fn new(service: NotificationService<S>, message: impl Into<String>) -> Self {
        Self {
            service,
            message: message.into(),
        }
    }

    pub fn service(&self) -> &NotificationService<S> {
        &self.service
    }

    /// Run every demo send once, then print the summary and the archive
    pub fn run<W: Write>(&mut self, out: &mut W) -> AppResult<DemoSummary> {
        writeln!(out, "=== Notification Simulator: demo ===")?;

        let mut summary = DemoSummary::default();
        for (channel, target) in DEMO_SENDS {
            let result = self.service.send(channel, target, &self.message);
            if report_send(out, channel.label(), result)? {
                summary.sent += 1;
            } else {
                summary.failed += 1;
            }
        }

        tracing::info!(sent = summary.sent, failed = summary.failed, "Demo finished");

        writeln!(out)?;
        writeln!(
            out,
            "=== Summary: {} sent, {} failed ===",
            summary.sent, summary.failed
        )?;
        write_history(out, &self.service.history()?)?;

        Ok(summary)
    }
}
