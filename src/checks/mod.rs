//! Per-metric checks
//!
//! Each check samples one metric through a system command and knows how to
//! describe it. Classification and alerting are shared and live in
//! [`crate::services`].

pub mod cpu;
pub mod disk;
pub mod memory;

pub use cpu::CpuCheck;
pub use disk::DiskCheck;
pub use memory::MemoryCheck;

use crate::domain::{CheckId, Thresholds};
use crate::error::SampleError;
use std::process::Command;

/// A sampled metric value with its human-readable description
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    /// Value compared against the thresholds
    pub value: f64,
    /// Text used in logs and notifications (e.g. "85% on /")
    pub text: String,
}

impl Reading {
    pub fn new(value: f64, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }
}

/// A single-metric host check
pub trait Check {
    /// Identity selecting the state record
    fn id(&self) -> &CheckId;

    /// Metric label used in notifications (e.g. "Disk usage")
    fn label(&self) -> &str;

    /// Validated thresholds for this check
    fn thresholds(&self) -> &Thresholds;

    /// One-line description logged before sampling
    fn describe(&self) -> String;

    /// Sample the metric
    fn sample(&self) -> Result<Reading, SampleError>;
}

/// Runs external commands and returns their stdout
///
/// This trait abstracts process execution, allowing canned output in tests.
pub trait CommandRunner {
    /// Run `program` with `args`, failing on spawn errors or non-zero exit
    fn run(&self, program: &str, args: &[&str]) -> Result<String, SampleError>;
}

/// Command runner backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, SampleError> {
        log::debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| SampleError::Spawn {
                command: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(SampleError::CommandFailed {
                command: program.to_string(),
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(96.94), 96.9);
        assert_eq!(round1(96.96), 97.0);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_system_runner_missing_program() {
        let err = SystemCommandRunner
            .run("hostwatch-definitely-not-a-program", &[])
            .unwrap_err();
        assert!(matches!(err, SampleError::Spawn { .. }));
    }

    #[test]
    fn test_system_runner_captures_stdout() {
        let out = SystemCommandRunner.run("echo", &["hello"]).unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[test]
    fn test_system_runner_non_zero_exit() {
        let err = SystemCommandRunner.run("false", &[]).unwrap_err();
        assert!(matches!(err, SampleError::CommandFailed { status: 1, .. }));
    }
}
