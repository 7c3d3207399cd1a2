//! Console rendering shared by the interactive and demo front ends.

use std::io::Write;

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::error::AppResult;
use crate::models::Notification;
use crate::services::notifications::SendOutcome;

/// Format of the `Date` column in history listings
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shown instead of a listing when the archive is empty
pub const EMPTY_HISTORY_MESSAGE: &str = "No notifications sent successfully yet.";

pub fn format_timestamp(timestamp: Timestamp, tz: &TimeZone) -> String {
    timestamp.to_zoned(tz.clone()).strftime(TIMESTAMP_FORMAT).to_string()
}

/// Write the archive listing using the system time zone
pub fn write_history<W: Write>(out: &mut W, notifications: &[Notification]) -> AppResult<()> {
    write_history_in(out, notifications, &TimeZone::system())
}

/// Write the archive listing, one line per notification
pub fn write_history_in<W: Write>(
    out: &mut W,
    notifications: &[Notification],
    tz: &TimeZone,
) -> AppResult<()> {
    if notifications.is_empty() {
        writeln!(out, "{}", EMPTY_HISTORY_MESSAGE)?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "=== Successful send history ===")?;
    for notification in notifications {
        writeln!(
            out,
            "ID: {} | Channel: {} | Recipient: {} | Message: '{}' | Date: {}",
            notification.id,
            notification.channel,
            notification.target.as_deref().unwrap_or("-"),
            notification.message,
            format_timestamp(notification.timestamp, tz),
        )?;
    }
    Ok(())
}

/// Print the outcome of a send attempt
///
/// Recoverable errors are printed with a channel tag and swallowed; fatal
/// errors are returned.
///
/// # Returns
/// `true` when the notification was sent and archived
pub fn report_send<W: Write>(
    out: &mut W,
    channel: &str,
    result: AppResult<SendOutcome>,
) -> AppResult<bool> {
    match result {
        Ok(outcome) => {
            writeln!(out, "{}", outcome.receipt.confirmation)?;
            Ok(true)
        }
        Err(err) if err.is_recoverable() => {
            writeln!(out, "[ERROR - {}] ❌ {}", channel, err)?;
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
