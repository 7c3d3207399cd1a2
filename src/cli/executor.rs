//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use std::io::{BufRead, Write};

use super::handlers::{DemoCommandHandler, InteractiveCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::repositories::MemoryNotificationStore;
use crate::services::NotificationService;

/// Execute a CLI command with the given settings
///
/// Each run gets a fresh in-memory archive; nothing survives the process.
///
/// # Arguments
/// * `cli` - Parsed CLI arguments
/// * `settings` - Merged and validated settings
/// * `input` - Line source for the interactive session
/// * `out` - Destination for user-facing output
///
/// # Errors
/// Returns I/O errors from reading input or writing output
pub fn execute_command<R: BufRead, W: Write>(
    cli: &Cli,
    settings: Settings,
    input: &mut R,
    out: &mut W,
) -> AppResult<()> {
    let service = NotificationService::new(MemoryNotificationStore::new(), &settings.notifications);

    match cli.resolved_command() {
        Commands::Interactive => {
            tracing::debug!("Starting interactive session");
            InteractiveCommandHandler::new(service).run(input, out)
        }
        Commands::Demo { .. } => {
            tracing::debug!(message = %settings.demo.message, "Starting demo");
            DemoCommandHandler::new(service, settings.demo.message)
                .run(out)
                .map(|_| ())
        }
    }
}
