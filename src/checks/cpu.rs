//! CPU idle check
//!
//! Samples idle CPU percentage from `top -bn1`. Lower idle is worse.

use super::{round1, Check, CommandRunner, Reading};
use crate::domain::{CheckId, Direction, Thresholds};
use crate::error::{ConfigError, SampleError};

use regex::Regex;
use std::sync::LazyLock;

const COMMAND: &str = "top";

static IDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.?\d*)\s*id").expect("idle pattern is valid"));

/// Default warning threshold (% idle)
pub const DEFAULT_WARNING: f64 = 20.0;
/// Default critical threshold (% idle)
pub const DEFAULT_CRITICAL: f64 = 10.0;

/// Idle CPU check
pub struct CpuCheck<R: CommandRunner> {
    id: CheckId,
    thresholds: Thresholds,
    runner: R,
}

impl<R: CommandRunner> CpuCheck<R> {
    /// Create the check, validating thresholds (warning must exceed critical)
    pub fn new(warning: f64, critical: f64, runner: R) -> Result<Self, ConfigError> {
        Ok(Self {
            id: CheckId::new_unchecked("cpu"),
            thresholds: Thresholds::new(warning, critical, Direction::LowerIsWorse)?,
            runner,
        })
    }
}

impl<R: CommandRunner> Check for CpuCheck<R> {
    fn id(&self) -> &CheckId {
        &self.id
    }

    fn label(&self) -> &str {
        "CPU idle"
    }

    fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    fn describe(&self) -> String {
        format!(
            "Checking CPU (warning={}% idle, critical={}% idle)",
            self.thresholds.warning(),
            self.thresholds.critical()
        )
    }

    fn sample(&self) -> Result<Reading, SampleError> {
        let output = self.runner.run(COMMAND, &["-bn1"])?;
        let idle = parse_idle(&output)?;
        let usage = round1(100.0 - idle);
        Ok(Reading::new(
            idle,
            format!("{:.1}% idle ({:.1}% used)", idle, usage),
        ))
    }
}

/// Extract idle percentage from the `Cpu(s)` line of `top` batch output
pub fn parse_idle(output: &str) -> Result<f64, SampleError> {
    let line = output
        .lines()
        .find(|l| l.contains("Cpu(s)"))
        .ok_or_else(|| SampleError::unexpected(COMMAND, "no Cpu(s) line found"))?;

    let idle = IDLE_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .ok_or_else(|| {
            SampleError::unexpected(COMMAND, format!("no idle value in line: {}", line.trim()))
        })?
        .as_str()
        .parse::<f64>()
        .map_err(|e| SampleError::unexpected(COMMAND, format!("invalid idle value: {}", e)))?;

    Ok(round1(idle))
}
