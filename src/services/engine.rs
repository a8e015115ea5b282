//! State-transition engine
//!
//! Compares a check's fresh classification with the last recorded one,
//! notifies on alerts and recoveries, and records the new state.

use crate::domain::{CheckId, Notification, Severity, Transition};
use crate::error::StateError;
use crate::notify::NotificationManager;
use crate::state::StateStore;

/// Outcome of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// State recorded by the previous run (OK when none)
    pub previous: Severity,
    /// State just recorded
    pub current: Severity,
    /// What changed between the two
    pub transition: Transition,
}

impl Evaluation {
    /// Process exit code for the recorded state
    pub fn exit_code(&self) -> i32 {
        self.current.exit_code()
    }
}

/// Transition engine shared by all checks
pub struct TransitionEngine<S: StateStore> {
    store: S,
    notifier: NotificationManager,
}

impl<S: StateStore> TransitionEngine<S> {
    /// Create an engine from a state store and notification channels
    pub fn new(store: S, notifier: NotificationManager) -> Self {
        Self { store, notifier }
    }

    /// Evaluate a freshly classified state for `check`
    ///
    /// Notification failures are logged and ignored. The state write is
    /// the last step; if it fails the error is returned and the previous
    /// record stays in place.
    pub fn evaluate(
        &self,
        check: &CheckId,
        current: Severity,
        metric_label: &str,
        metric_value: &str,
    ) -> Result<Evaluation, StateError> {
        let _guard = self.store.lock(check)?;

        let previous = self.store.load(check);

        log::info!("Previous state: {}", previous);
        log::info!("Current state: {}", current);
        log::info!("{}: {}", metric_label, metric_value);

        let transition = Transition::between(previous, current);
        if let Some(notification) =
            Notification::for_transition(transition, check, current, metric_label, metric_value)
        {
            log::info!("Sending {} notification for {}", transition, check);
            self.notifier.notify_all(&notification);
        }

        self.store.write(check, current)?;

        Ok(Evaluation {
            previous,
            current,
            transition,
        })
    }

    /// Access the underlying state store
    pub fn store(&self) -> &S {
        &self.store
    }
}
