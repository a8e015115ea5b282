//! CLI argument parsing and output formatting
//!
//! Arguments fall back to environment variables so checks can be driven
//! from cron or systemd units without flags.

pub mod args;
pub mod output;

pub use args::{Cli, Commands, OutputFormat};
