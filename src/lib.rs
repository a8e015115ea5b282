//! hostwatch - host monitoring library
//!
//! Single-metric host checks (CPU, memory, disk) feeding a shared
//! state-transition engine that persists the last known state per check
//! and notifies only on alerts and recoveries.
//!
//! # Modules
//!
//! - [`checks`]: Metric samplers
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`notify`]: Notification channels
//! - [`services`]: Transition engine and check runner
//! - [`state`]: Persisted per-check state

pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod notify;
pub mod services;
pub mod state;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
