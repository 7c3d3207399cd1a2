//! notify-sim library
//!
//! Core modules for the notification simulator: channel providers, the
//! in-memory archive, and the command-line front ends.

use shadow_rs::shadow;
shadow!(build);

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod services;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}
