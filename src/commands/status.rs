//! Status command implementation
//!
//! Shows the last recorded state of each check without sampling anything.

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, StateEntry, StateReport};
use crate::config::Config;
use crate::domain::{CheckId, Severity};
use crate::error::Result;
use crate::state::StateStore;

/// Checks shown when none are named
pub const DEFAULT_CHECKS: [&str; 3] = ["cpu", "memory", "disk"];

/// Execute the status command
pub fn run_status(config: &Config, checks: &[String], format: OutputFormat) -> Result<()> {
    let ids = check_ids(checks)?;
    let store = config.state_store();

    let report = state_report(&store, &store.dir().display().to_string(), &ids);
    print_output(&report, format)?;

    Ok(())
}

/// Parse check names, falling back to the built-in checks
pub(crate) fn check_ids(names: &[String]) -> Result<Vec<CheckId>> {
    if names.is_empty() {
        return Ok(DEFAULT_CHECKS
            .iter()
            .map(|name| CheckId::new_unchecked(name))
            .collect());
    }

    let ids = names
        .iter()
        .map(|name| CheckId::new(name.as_str()))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(ids)
}

/// Collect recorded states from `store`
pub fn state_report<S: StateStore>(store: &S, location: &str, checks: &[CheckId]) -> StateReport {
    let checks = checks
        .iter()
        .map(|id| {
            let raw = store.read(id);
            StateEntry {
                check: id.to_string(),
                state: raw.as_deref().map(Severity::from_token).unwrap_or_default(),
                recorded: raw.is_some(),
            }
        })
        .collect();

    StateReport {
        state_dir: location.to_string(),
        checks,
    }
}
