//! Notification channels
//!
//! Provides the channel trait, a log-backed channel, and the manager that
//! fans notifications out to every configured channel.

use crate::domain::{Notification, Severity};
use crate::error::NotifyError;

/// Notification channel trait
pub trait Notifier {
    /// Send a notification
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;

    /// Channel name for identification
    fn name(&self) -> &str;
}

/// Channel writing notifications to the application log
///
/// Problem states are logged as warnings so they stand out in cron mail.
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }

    fn level_for(severity: Severity) -> log::Level {
        match severity {
            Severity::Ok => log::Level::Info,
            Severity::Warning | Severity::Critical => log::Level::Warn,
        }
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        log::log!(
            Self::level_for(notification.level),
            "[{}] {} - {}",
            notification.level,
            notification.title,
            notification.message
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

/// Notification manager
///
/// Dispatches to every channel. Delivery is best-effort: channel failures
/// are logged and never reach the caller.
pub struct NotificationManager {
    notifiers: Vec<Box<dyn Notifier>>,
    enabled: bool,
}

impl NotificationManager {
    /// Create an enabled manager with no channels
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
            enabled: true,
        }
    }

    /// Create a manager that accepts and drops everything
    pub fn disabled() -> Self {
        Self {
            notifiers: Vec::new(),
            enabled: false,
        }
    }

    /// Add a notifier
    pub fn add_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Builder form of [`add_notifier`](Self::add_notifier)
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.add_notifier(notifier);
        self
    }

    /// Send a notification to all channels
    ///
    /// Returns how many channels accepted it.
    pub fn notify_all(&self, notification: &Notification) -> usize {
        if !self.enabled {
            log::debug!("Notifications disabled, dropping '{}'", notification.title);
            return 0;
        }

        let mut delivered = 0;
        for notifier in &self.notifiers {
            match notifier.notify(notification) {
                Ok(()) => delivered += 1,
                Err(e) => log::warn!("Failed to notify via {}: {}", notifier.name(), e),
            }
        }
        delivered
    }

    /// Get number of active notifiers
    pub fn notifier_count(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if notifications are enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new().with_notifier(Box::new(LogNotifier::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingNotifier;

    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&self, _notification: &Notification) -> Result<(), NotifyError> {
            Err(NotifyError::HttpStatus(500))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn sample() -> Notification {
        Notification::alert(Severity::Warning, "Disk usage", "85% on /")
    }

    #[test]
    fn test_log_notifier() {
        let notifier = LogNotifier::new();
        assert_eq!(notifier.name(), "log");
        assert!(notifier.notify(&sample()).is_ok());
    }

    #[test]
    fn test_notification_manager_creation() {
        let manager = NotificationManager::new();
        assert_eq!(manager.notifier_count(), 0);
        assert!(manager.is_enabled());
    }

    #[test]
    fn test_notification_manager_default() {
        let manager = NotificationManager::default();
        assert_eq!(manager.notifier_count(), 1);
    }

    #[test]
    fn test_failure_does_not_stop_other_channels() {
        let recorder = RecordingNotifier::new();
        let manager = NotificationManager::new()
            .with_notifier(Box::new(FailingNotifier))
            .with_notifier(Box::new(recorder.clone()));

        assert_eq!(manager.notify_all(&sample()), 1);
        assert_eq!(recorder.sent().len(), 1);
    }

    #[test]
    fn test_disabled_manager_drops() {
        let recorder = RecordingNotifier::new();
        let mut manager = NotificationManager::disabled();
        manager.add_notifier(Box::new(recorder.clone()));

        assert_eq!(manager.notify_all(&sample()), 0);
        assert!(recorder.sent().is_empty());
    }
}
