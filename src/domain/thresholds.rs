//! Warning/critical threshold pair
//!
//! Validated on construction (fail-fast) so classification can assume a
//! consistent ordering.

use super::Severity;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction in which a metric gets worse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Higher is worse (usage-style metrics such as disk usage)
    HigherIsWorse,
    /// Lower is worse (availability-style metrics such as idle CPU)
    LowerIsWorse,
}

impl Direction {
    /// Whether thresholds for this direction are inverted
    pub fn is_inverted(&self) -> bool {
        matches!(self, Self::LowerIsWorse)
    }
}

/// A validated warning/critical pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    warning: f64,
    critical: f64,
    direction: Direction,
}

impl Thresholds {
    /// Create a threshold pair, validating its ordering
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidThresholds` when the pair is inconsistent
    /// with `direction` (equal values are always rejected)
    pub fn new(warning: f64, critical: f64, direction: Direction) -> Result<Self, ConfigError> {
        validate_thresholds(warning, critical, direction.is_inverted())?;
        Ok(Self {
            warning,
            critical,
            direction,
        })
    }

    pub fn warning(&self) -> f64 {
        self.warning
    }

    pub fn critical(&self) -> f64 {
        self.critical
    }

    /// Classify a sampled value
    ///
    /// Higher-is-worse: `< warning` is OK, `< critical` is WARNING.
    /// Lower-is-worse: `>= warning` is OK, `>= critical` is WARNING.
    /// Anything else is CRITICAL.
    pub fn classify(&self, value: f64) -> Severity {
        match self.direction {
            Direction::HigherIsWorse => {
                if value < self.warning {
                    Severity::Ok
                } else if value < self.critical {
                    Severity::Warning
                } else {
                    Severity::Critical
                }
            }
            Direction::LowerIsWorse => {
                if value >= self.warning {
                    Severity::Ok
                } else if value >= self.critical {
                    Severity::Warning
                } else {
                    Severity::Critical
                }
            }
        }
    }
}

impl fmt::Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning={}, critical={}", self.warning, self.critical)
    }
}

/// Check that a warning/critical pair is ordered consistently
///
/// Non-inverted metrics need `warning < critical`; inverted metrics need
/// `warning > critical`.
pub fn validate_thresholds(warning: f64, critical: f64, inverted: bool) -> Result<(), ConfigError> {
    let (valid, relation) = if inverted {
        (warning > critical, "greater")
    } else {
        (warning < critical, "lower")
    };

    if !valid {
        return Err(ConfigError::InvalidThresholds {
            warning,
            critical,
            relation,
        });
    }
    Ok(())
}
