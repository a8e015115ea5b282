//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Host monitoring checks with state-transition alerting
///
/// Each check samples one metric, classifies it as OK, WARNING or CRITICAL,
/// and notifies only when the state changes. Exit codes are 0, 1 and 2.
#[derive(Parser, Debug)]
#[command(name = "hostwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "HOSTWATCH_CONFIG")]
    pub config: Option<String>,

    /// Directory holding per-check state records
    #[arg(long, global = true, env = "STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Enable notifications ("true"); any other value disables them
    #[arg(
        long,
        global = true,
        env = "NOTIFICATIONS_ENABLED",
        value_parser = parse_enabled
    )]
    pub notifications: Option<bool>,

    /// Discord webhook URL
    #[arg(long, global = true, env = "DISCORD_WEBHOOK", hide_env_values = true)]
    pub webhook: Option<String>,

    /// Hold an exclusive lock on the state record while evaluating
    #[arg(long, global = true)]
    pub lock_state: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check CPU idle percentage
    Cpu(ThresholdArgs),

    /// Check available memory percentage
    Memory(ThresholdArgs),

    /// Check disk usage percentage
    Disk(DiskArgs),

    /// Show the recorded state of checks
    Status {
        /// Checks to show (default: cpu, memory, disk)
        checks: Vec<String>,
    },

    /// Remove recorded state so the next run starts from OK
    Reset {
        /// Checks to reset
        #[arg(required = true)]
        checks: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Warning/critical overrides shared by every check
#[derive(Parser, Debug, Clone, Copy)]
pub struct ThresholdArgs {
    /// Warning threshold
    #[arg(short, long, env = "WARNING")]
    pub warning: Option<f64>,

    /// Critical threshold
    #[arg(short = 'C', long, env = "CRITICAL")]
    pub critical: Option<f64>,
}

/// Arguments for the disk check
#[derive(Parser, Debug)]
pub struct DiskArgs {
    /// Path whose filesystem is checked
    #[arg(short, long, env = "DISK_PATH")]
    pub path: Option<String>,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Only a case-insensitive "true" enables notifications
fn parse_enabled(value: &str) -> Result<bool, String> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_cpu() {
        let args = Cli::try_parse_from(["hostwatch", "cpu", "--warning", "25"]).unwrap();
        if let Commands::Cpu(t) = args.command {
            assert_eq!(t.warning, Some(25.0));
        } else {
            panic!("Expected Cpu command");
        }
    }

    #[test]
    fn test_cli_parse_verbose() {
        let args = Cli::try_parse_from(["hostwatch", "-v", "memory"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(args.command, Commands::Memory(_)));
    }

    #[test]
    fn test_cli_parse_disk() {
        let args = Cli::try_parse_from([
            "hostwatch",
            "disk",
            "--path",
            "/var",
            "--warning",
            "70",
            "--critical",
            "85",
        ])
        .unwrap();

        if let Commands::Disk(disk) = args.command {
            assert_eq!(disk.path.as_deref(), Some("/var"));
            assert_eq!(disk.thresholds.warning, Some(70.0));
            assert_eq!(disk.thresholds.critical, Some(85.0));
        } else {
            panic!("Expected Disk command");
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let args = Cli::try_parse_from([
            "hostwatch",
            "disk",
            "--state-dir",
            "/var/lib/hostwatch",
            "--notifications",
            "false",
            "--lock-state",
        ])
        .unwrap();
        assert_eq!(args.state_dir, Some(PathBuf::from("/var/lib/hostwatch")));
        assert_eq!(args.notifications, Some(false));
        assert!(args.lock_state);
    }

    #[test]
    fn test_cli_notifications_value_is_lenient() {
        let parse = |value: &str| {
            Cli::try_parse_from(["hostwatch", "cpu", "--notifications", value])
                .unwrap()
                .notifications
        };
        assert_eq!(parse("TRUE"), Some(true));
        assert_eq!(parse("true"), Some(true));
        assert_eq!(parse("enabled"), Some(false));
        assert_eq!(parse("0"), Some(false));
    }

    #[test]
    fn test_cli_threshold_must_be_numeric() {
        let result = Cli::try_parse_from(["hostwatch", "cpu", "--warning", "high"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_reset_requires_check() {
        assert!(Cli::try_parse_from(["hostwatch", "reset"]).is_err());

        let args = Cli::try_parse_from(["hostwatch", "reset", "cpu", "disk"]).unwrap();
        if let Commands::Reset { checks } = args.command {
            assert_eq!(checks, vec!["cpu", "disk"]);
        } else {
            panic!("Expected Reset command");
        }
    }

    #[test]
    fn test_cli_status_defaults_to_empty() {
        let args = Cli::try_parse_from(["hostwatch", "status"]).unwrap();
        assert!(matches!(args.command, Commands::Status { ref checks } if checks.is_empty()));
    }
}
