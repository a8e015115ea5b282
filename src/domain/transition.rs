//! State transitions between consecutive check runs

use super::{CheckId, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What changed between the previous and current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Entered a problem state, or moved between WARNING and CRITICAL
    Alert,
    /// Left a problem state for OK
    Recovery,
    /// Nothing worth notifying about
    Unchanged,
}

impl Transition {
    /// Decide the transition from the last recorded state to the current one
    ///
    /// Alert iff `last != current` and `current != OK`; recovery iff
    /// `last != OK` and `current == OK`. The two can never both hold.
    pub fn between(last: Severity, current: Severity) -> Self {
        let should_alert = last != current && current != Severity::Ok;
        let should_recover = last != Severity::Ok && current == Severity::Ok;

        if should_alert {
            Self::Alert
        } else if should_recover {
            Self::Recovery
        } else {
            Self::Unchanged
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alert => write!(f, "ALERT"),
            Self::Recovery => write!(f, "RECOVERY"),
            Self::Unchanged => write!(f, "UNCHANGED"),
        }
    }
}

/// A message handed to notification channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub level: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, level: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level,
        }
    }

    /// Alert for a check entering (or changing) a problem state
    pub fn alert(current: Severity, metric_label: &str, metric_value: &str) -> Self {
        Self::new(
            format!("{}: {}", current, metric_label),
            format!("{}: {}", metric_label, metric_value),
            current,
        )
    }

    /// Recovery notice for a check back to OK
    pub fn recovery(check: &CheckId, metric_label: &str, metric_value: &str) -> Self {
        Self::new(
            format!("RECOVERY: {} OK", check.display_name()),
            format!("{} normalizado: {}", metric_label, metric_value),
            Severity::Ok,
        )
    }

    /// Build the notification for a transition, if it needs one
    pub fn for_transition(
        transition: Transition,
        check: &CheckId,
        current: Severity,
        metric_label: &str,
        metric_value: &str,
    ) -> Option<Self> {
        match transition {
            Transition::Alert => Some(Self::alert(current, metric_label, metric_value)),
            Transition::Recovery => Some(Self::recovery(check, metric_label, metric_value)),
            Transition::Unchanged => None,
        }
    }
}
