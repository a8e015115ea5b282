//! Disk usage check
//!
//! Samples filesystem usage for a path from `df -P`. Higher usage is worse.

use super::{Check, CommandRunner, Reading};
use crate::domain::{CheckId, Direction, Thresholds};
use crate::error::{ConfigError, SampleError};

const COMMAND: &str = "df";

/// Default warning threshold (% used)
pub const DEFAULT_WARNING: f64 = 80.0;
/// Default critical threshold (% used)
pub const DEFAULT_CRITICAL: f64 = 90.0;
/// Default path to check
pub const DEFAULT_PATH: &str = "/";

/// Disk usage check for a single mount point
pub struct DiskCheck<R: CommandRunner> {
    id: CheckId,
    thresholds: Thresholds,
    path: String,
    runner: R,
}

impl<R: CommandRunner> DiskCheck<R> {
    /// Create the check, validating thresholds (warning must be below critical)
    pub fn new(
        warning: f64,
        critical: f64,
        path: impl Into<String>,
        runner: R,
    ) -> Result<Self, ConfigError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "disk.path".to_string(),
                message: "path must not be empty".to_string(),
            });
        }

        Ok(Self {
            id: CheckId::new_unchecked("disk"),
            thresholds: Thresholds::new(warning, critical, Direction::HigherIsWorse)?,
            path,
            runner,
        })
    }

    /// Path being checked
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<R: CommandRunner> Check for DiskCheck<R> {
    fn id(&self) -> &CheckId {
        &self.id
    }

    fn label(&self) -> &str {
        "Disk usage"
    }

    fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    fn describe(&self) -> String {
        format!(
            "Checking disk on '{}' (warning={}%, critical={}%)",
            self.path,
            self.thresholds.warning(),
            self.thresholds.critical()
        )
    }

    fn sample(&self) -> Result<Reading, SampleError> {
        let output = self.runner.run(COMMAND, &["-P", &self.path])?;
        let used = parse_use_percent(&output)?;
        Ok(Reading::new(
            f64::from(used),
            format!("{}% on {}", used, self.path),
        ))
    }
}

/// Extract the `Use%` column from `df -P` output
pub fn parse_use_percent(output: &str) -> Result<u32, SampleError> {
    let line = output
        .lines()
        .nth(1)
        .ok_or_else(|| SampleError::unexpected(COMMAND, "fewer than two lines"))?;

    let column = line
        .split_whitespace()
        .nth(4)
        .ok_or_else(|| SampleError::unexpected(COMMAND, "could not find Use% column"))?;

    column
        .trim_end_matches('%')
        .parse::<u32>()
        .map_err(|_| SampleError::unexpected(COMMAND, format!("invalid disk usage '{}'", column)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::CannedRunner;

    const DF_OUTPUT: &str = "\
Filesystem     1024-blocks     Used Available Capacity Mounted on
/dev/sda1         51290592 48212404   3061804      95% /
";

    #[test]
    fn test_parse_use_percent() {
        assert_eq!(parse_use_percent(DF_OUTPUT).unwrap(), 95);
    }

    #[test]
    fn test_parse_missing_column() {
        let out = "Filesystem Size\n/dev/sda1 10G\n";
        let err = parse_use_percent(out).unwrap_err();
        assert!(err.to_string().contains("Use%"));
    }

    #[test]
    fn test_parse_invalid_value() {
        let out = "header\n/dev/sda1 1 1 1 -% /\n";
        assert!(parse_use_percent(out).is_err());
    }

    #[test]
    fn test_parse_header_only() {
        assert!(parse_use_percent("Filesystem 1024-blocks Used\n").is_err());
    }

    #[test]
    fn test_sample() {
        let runner = CannedRunner::new().with_output("df", DF_OUTPUT);
        let check = DiskCheck::new(DEFAULT_WARNING, DEFAULT_CRITICAL, "/", runner).unwrap();

        let reading = check.sample().unwrap();
        assert_eq!(reading.value, 95.0);
        assert_eq!(reading.text, "95% on /");
        assert_eq!(check.runner.calls(), vec![vec!["df", "-P", "/"]]);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(DiskCheck::new(90.0, 80.0, "/", CannedRunner::new()).is_err());
        assert!(DiskCheck::new(80.0, 80.0, "/", CannedRunner::new()).is_err());
        assert!(DiskCheck::new(80.0, 90.0, "", CannedRunner::new()).is_err());
    }
}
