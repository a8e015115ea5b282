//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::{Severity, Transition};
use crate::error::Result;
use crate::services::Evaluation;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Result of a single check run
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub check: String,
    pub label: String,
    pub value: String,
    pub previous: Severity,
    pub current: Severity,
    pub transition: Transition,
}

impl CheckReport {
    pub fn new(check: &str, label: &str, value: &str, evaluation: &Evaluation) -> Self {
        Self {
            check: check.to_string(),
            label: label.to_string(),
            value: value.to_string(),
            previous: evaluation.previous,
            current: evaluation.current,
            transition: evaluation.transition,
        }
    }
}

impl TableDisplay for CheckReport {
    fn to_table(&self) -> String {
        format!(
            "{}: {}\n  {}: {}\n  Previous: {} ({})",
            self.check, self.current, self.label, self.value, self.previous, self.transition
        )
    }

    fn to_compact(&self) -> String {
        format!("{}={} {}", self.check, self.current, self.value)
    }
}

/// Recorded state of one check
#[derive(Debug, Clone, Serialize)]
pub struct StateEntry {
    pub check: String,
    pub state: Severity,
    /// False when no record exists and OK is assumed
    pub recorded: bool,
}

impl TableDisplay for StateEntry {
    fn to_table(&self) -> String {
        if self.recorded {
            format!("  {:<10} {}", self.check, self.state)
        } else {
            format!("  {:<10} {} (no record)", self.check, self.state)
        }
    }

    fn to_compact(&self) -> String {
        format!("{}={}", self.check, self.state)
    }
}

/// Recorded states for the `status` command
#[derive(Debug, Clone, Serialize)]
pub struct StateReport {
    pub state_dir: String,
    pub checks: Vec<StateEntry>,
}

impl TableDisplay for StateReport {
    fn to_table(&self) -> String {
        let mut output = format!("State directory: {}\n\n", self.state_dir);

        for entry in &self.checks {
            output.push_str(&entry.to_table());
            output.push('\n');
        }

        output
    }

    fn to_compact(&self) -> String {
        self.checks
            .iter()
            .map(|c| c.to_compact())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Simple message output
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub message: String,
    pub success: bool,
}

impl TableDisplay for Message {
    fn to_table(&self) -> String {
        if self.success {
            format!("✓ {}", self.message)
        } else {
            format!("✗ {}", self.message)
        }
    }
}
