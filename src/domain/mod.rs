//! Domain models for hostwatch
//!
//! This module contains all domain types with validation.
//! Types are validated on construction (fail-fast pattern).

pub mod check;
pub mod severity;
pub mod thresholds;
pub mod transition;

pub use check::CheckId;
pub use severity::Severity;
pub use thresholds::{validate_thresholds, Direction, Thresholds};
pub use transition::{Notification, Transition};
