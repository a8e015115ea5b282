//! Available memory check
//!
//! Samples available RAM from `free -m`. Lower availability is worse.

use super::{round1, Check, CommandRunner, Reading};
use crate::domain::{CheckId, Direction, Thresholds};
use crate::error::{ConfigError, SampleError};

const COMMAND: &str = "free";

/// Default warning threshold (% available)
pub const DEFAULT_WARNING: f64 = 20.0;
/// Default critical threshold (% available)
pub const DEFAULT_CRITICAL: f64 = 10.0;

/// Memory figures from the `Mem:` row, in MiB
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub total_mb: u64,
    pub available_mb: u64,
}

impl MemoryUsage {
    /// Available memory as a percentage of total, one decimal
    pub fn available_percent(&self) -> f64 {
        round1(self.available_mb as f64 / self.total_mb as f64 * 100.0)
    }
}

/// Available memory check
pub struct MemoryCheck<R: CommandRunner> {
    id: CheckId,
    thresholds: Thresholds,
    runner: R,
}

impl<R: CommandRunner> MemoryCheck<R> {
    /// Create the check, validating thresholds (warning must exceed critical)
    pub fn new(warning: f64, critical: f64, runner: R) -> Result<Self, ConfigError> {
        Ok(Self {
            id: CheckId::new_unchecked("memory"),
            thresholds: Thresholds::new(warning, critical, Direction::LowerIsWorse)?,
            runner,
        })
    }
}

impl<R: CommandRunner> Check for MemoryCheck<R> {
    fn id(&self) -> &CheckId {
        &self.id
    }

    fn label(&self) -> &str {
        "Memory available"
    }

    fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    fn describe(&self) -> String {
        format!(
            "Checking memory (warning={}% available, critical={}% available)",
            self.thresholds.warning(),
            self.thresholds.critical()
        )
    }

    fn sample(&self) -> Result<Reading, SampleError> {
        let output = self.runner.run(COMMAND, &["-m"])?;
        let usage = parse_free(&output)?;
        let percent = usage.available_percent();
        Ok(Reading::new(
            percent,
            format!(
                "{:.1}% ({}MB of {}MB)",
                percent, usage.available_mb, usage.total_mb
            ),
        ))
    }
}

/// Parse total and available MiB from `free -m` output
///
/// Uses the second line (the `Mem:` row); total is column 1 and available
/// column 6.
pub fn parse_free(output: &str) -> Result<MemoryUsage, SampleError> {
    let line = output
        .lines()
        .nth(1)
        .ok_or_else(|| SampleError::unexpected(COMMAND, "fewer than two lines"))?;

    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() < 7 {
        return Err(SampleError::unexpected(
            COMMAND,
            format!("expected 7 columns, got {}", columns.len()),
        ));
    }

    let parse = |idx: usize, name: &str| {
        columns[idx].parse::<u64>().map_err(|_| {
            SampleError::unexpected(COMMAND, format!("invalid {} value '{}'", name, columns[idx]))
        })
    };
    let total_mb = parse(1, "total")?;
    let available_mb = parse(6, "available")?;

    if total_mb == 0 {
        return Err(SampleError::unexpected(COMMAND, "total memory is zero"));
    }

    Ok(MemoryUsage {
        total_mb,
        available_mb,
    })
}
