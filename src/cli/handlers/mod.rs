//! Command handlers for CLI operations
//!
//! This module contains the two front ends over the notification service,
//! separating command execution logic from parsing and validation.

pub mod demo;
pub mod interactive;

pub use demo::{DemoCommandHandler, DemoSummary};
pub use interactive::{InteractiveCommandHandler, MenuChoice};
