//! Check command implementation
//!
//! Runs one metric check through the transition engine and reports the
//! resulting state as the process exit code.

use crate::checks::{Check, CpuCheck, DiskCheck, MemoryCheck, SystemCommandRunner};
use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, CheckReport};
use crate::config::Config;
use crate::error::Result;
use crate::services::{run_check, TransitionEngine};
use crate::state::StateStore;

/// Execute the CPU idle check
pub fn run_cpu(config: &Config, format: OutputFormat) -> Result<i32> {
    let check = CpuCheck::new(config.cpu.warning, config.cpu.critical, SystemCommandRunner)?;
    run_with(&check, &config.engine(), format)
}

/// Execute the available memory check
pub fn run_memory(config: &Config, format: OutputFormat) -> Result<i32> {
    let check = MemoryCheck::new(
        config.memory.warning,
        config.memory.critical,
        SystemCommandRunner,
    )?;
    run_with(&check, &config.engine(), format)
}

/// Execute the disk usage check
pub fn run_disk(config: &Config, format: OutputFormat) -> Result<i32> {
    let check = DiskCheck::new(
        config.disk.warning,
        config.disk.critical,
        config.disk.path.as_str(),
        SystemCommandRunner,
    )?;
    run_with(&check, &config.engine(), format)
}

/// Run `check` once, print the report and return the exit code
pub fn run_with<C: Check, S: StateStore>(
    check: &C,
    engine: &TransitionEngine<S>,
    format: OutputFormat,
) -> Result<i32> {
    let run = run_check(check, engine)?;

    let report = CheckReport::new(
        check.id().as_str(),
        check.label(),
        &run.reading.text,
        &run.evaluation,
    );
    print_output(&report, format)?;

    Ok(run.exit_code())
}
