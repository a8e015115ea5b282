//! Severity state domain type
//!
//! The closed set of states a check can be classified into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a check result
///
/// Ordered from best to worst.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Metric within normal range
    #[default]
    Ok,
    /// Metric crossed the warning threshold
    Warning,
    /// Metric crossed the critical threshold
    Critical,
}

impl Severity {
    /// All severities, best first
    pub const ALL: [Severity; 3] = [Severity::Ok, Severity::Warning, Severity::Critical];

    /// Token stored in the state record and used in notification text
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
        }
    }

    /// Parse a persisted token, falling back to `Ok` for anything unrecognized
    ///
    /// Matching is exact after trimming surrounding whitespace.
    pub fn from_token(token: &str) -> Self {
        Self::parse_strict(token).unwrap_or_default()
    }

    /// Parse a token, returning `None` when it is not one of the three states
    pub fn parse_strict(token: &str) -> Option<Self> {
        match token.trim() {
            "OK" => Some(Self::Ok),
            "WARNING" => Some(Self::Warning),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Process exit code reported to the scheduler
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_token(severity.as_str()), severity);
        }
    }

    #[test]
    fn test_unknown_token_is_ok() {
        assert_eq!(Severity::from_token("UNKNOWN"), Severity::Ok);
        assert_eq!(Severity::from_token(""), Severity::Ok);
        assert_eq!(Severity::from_token("warning"), Severity::Ok);
        assert_eq!(Severity::from_token("CRIT"), Severity::Ok);
    }

    #[test]
    fn test_token_whitespace_trimmed() {
        assert_eq!(Severity::from_token("WARNING\n"), Severity::Warning);
        assert_eq!(Severity::from_token("  CRITICAL  "), Severity::Critical);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 1);
        assert_eq!(Severity::Critical.exit_code(), 2);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
    }
}
