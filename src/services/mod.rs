//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the command-line front ends.

pub mod notifications;

pub use notifications::NotificationService;
