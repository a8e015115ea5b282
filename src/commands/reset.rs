//! Reset command implementation
//!
//! Removes recorded state so the next run of a check starts from OK.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, Message};
use crate::commands::status::check_ids;
use crate::config::Config;
use crate::domain::CheckId;
use crate::error::Result;
use crate::state::StateStore;

/// Execute the reset command
pub fn run_reset(config: &Config, checks: &[String], format: OutputFormat) -> Result<()> {
    let ids = check_ids(checks)?;
    let store = config.state_store();

    for message in reset_checks(&store, &ids)? {
        print_output(&message, format)?;
    }

    Ok(())
}

/// Clear each record, holding the check's lock while doing so
pub fn reset_checks<S: StateStore>(store: &S, checks: &[CheckId]) -> Result<Vec<Message>> {
    let mut messages = Vec::with_capacity(checks.len());

    for id in checks {
        let _guard = store.lock(id)?;
        let message = if store.clear(id)? {
            log::info!("Cleared recorded state for {}", id);
            format!("Cleared state for {}", id)
        } else {
            format!("No recorded state for {}", id)
        };
        messages.push(Message {
            message,
            success: true,
        });
    }

    Ok(messages)
}
