//! Unified error types for hostwatch
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Exit code for CRITICAL state and for every operational failure
pub const EXIT_FAILURE: i32 = 2;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while sampling a metric
    #[error("Sampling error: {0}")]
    Sample(#[from] SampleError),

    /// Error persisting check state
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// JSON serialization error for `--format json`
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (stdout, file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error
    ///
    /// Every failure maps to the same code as CRITICAL so a scheduler
    /// treats a broken check as an urgent one.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Check identity is empty
    #[error("Check name must not be empty")]
    EmptyCheckId,

    /// Check identity contains characters unusable in a file name
    #[error("Invalid check name '{0}': only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidCheckId(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Warning and critical thresholds are in the wrong order
    #[error("WARNING ({warning}) must be {relation} than CRITICAL ({critical}) for this check")]
    InvalidThresholds {
        warning: f64,
        critical: f64,
        relation: &'static str,
    },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Errors from metric sampling commands
#[derive(Error, Debug)]
pub enum SampleError {
    /// The command could not be started
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command exited with a non-zero status
    #[error("'{command}' exited with status {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: i32,
        stderr: String,
    },

    /// The command output did not have the expected shape
    #[error("Unexpected output from '{command}': {reason}")]
    UnexpectedOutput { command: String, reason: String },
}

impl SampleError {
    pub(crate) fn unexpected(command: &str, reason: impl Into<String>) -> Self {
        Self::UnexpectedOutput {
            command: command.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors from the persisted state record
#[derive(Error, Debug)]
pub enum StateError {
    /// Writing the record failed
    #[error("Failed to write state for '{check}' in {dir}: {source}")]
    Write {
        check: String,
        dir: String,
        #[source]
        source: std::io::Error,
    },

    /// Removing the record failed
    #[error("Failed to remove state for '{check}': {source}")]
    Remove {
        check: String,
        #[source]
        source: std::io::Error,
    },

    /// Acquiring the exclusive lock failed
    #[error("Failed to lock state for '{check}': {source}")]
    Lock {
        check: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from notification channels
///
/// These never abort a check; callers log and move on.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Channel is enabled but has no destination
    #[error("{0} is not configured")]
    NotConfigured(String),

    /// The HTTP request failed (network, DNS, timeout)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server answered with a non-success status
    #[error("Webhook returned HTTP {0}")]
    HttpStatus(u16),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
