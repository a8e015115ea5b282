//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod check;
pub mod reset;
pub mod status;

pub use check::{run_cpu, run_disk, run_memory};
pub use reset::run_reset;
pub use status::run_status;
