//! Configuration system
//!
//! Handles TOML config file parsing and CLI/environment overrides.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::checks::{cpu, disk, memory};
use crate::notify::{DiscordNotifier, LogNotifier, NotificationManager, DEFAULT_SOURCE};
use crate::services::TransitionEngine;
use crate::state::FileStateStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Notification settings
    pub notifications: NotificationConfig,
    /// CPU check thresholds (% idle)
    pub cpu: ThresholdConfig,
    /// Memory check thresholds (% available)
    pub memory: ThresholdConfig,
    /// Disk check settings (% used)
    pub disk: DiskConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            notifications: NotificationConfig::default(),
            cpu: ThresholdConfig::new(cpu::DEFAULT_WARNING, cpu::DEFAULT_CRITICAL),
            memory: ThresholdConfig::new(memory::DEFAULT_WARNING, memory::DEFAULT_CRITICAL),
            disk: DiskConfig::default(),
        }
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory holding `{check}.state` records
    pub state_dir: PathBuf,
    /// Hold an exclusive lock per check during evaluation
    pub lock_state: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            state_dir: FileStateStore::default_dir(),
            lock_state: false,
        }
    }
}

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Master switch; when false notifications are dropped
    pub enabled: bool,
    /// Discord webhook URL
    pub discord_webhook: Option<String>,
    /// HTTP timeout in seconds
    pub timeout_secs: u64,
    /// Source name shown in the embed footer
    pub source: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            discord_webhook: None,
            timeout_secs: 10,
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

/// Warning/critical pair as written in the config file
///
/// A section that is present must set both values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub warning: f64,
    pub critical: f64,
}

impl ThresholdConfig {
    pub fn new(warning: f64, critical: f64) -> Self {
        Self { warning, critical }
    }
}

/// Disk check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    pub warning: f64,
    pub critical: f64,
    /// Path whose filesystem is checked
    pub path: String,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self {
            warning: disk::DEFAULT_WARNING,
            critical: disk::DEFAULT_CRITICAL,
            path: disk::DEFAULT_PATH.to_string(),
        }
    }
}

impl Config {
    /// State store described by the general section
    pub fn state_store(&self) -> FileStateStore {
        FileStateStore::new(&self.general.state_dir).with_locking(self.general.lock_state)
    }

    /// Notification channels described by the notifications section
    ///
    /// The webhook channel is only built when a URL is set. Failing to build
    /// it leaves the log channel in place rather than failing the check.
    pub fn notification_manager(&self) -> NotificationManager {
        let settings = &self.notifications;
        if !settings.enabled {
            return NotificationManager::disabled();
        }

        let mut manager = NotificationManager::new().with_notifier(Box::new(LogNotifier::new()));

        match settings.discord_webhook.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => {
                match DiscordNotifier::new(
                    url,
                    settings.source.clone(),
                    Duration::from_secs(settings.timeout_secs),
                ) {
                    Ok(webhook) => manager.add_notifier(Box::new(webhook)),
                    Err(e) => log::warn!("Discord notifications unavailable: {}", e),
                }
            }
            _ => log::warn!("DISCORD_WEBHOOK is not configured, notifications are only logged"),
        }

        manager
    }

    /// Transition engine wired from this configuration
    pub fn engine(&self) -> TransitionEngine<FileStateStore> {
        TransitionEngine::new(self.state_store(), self.notification_manager())
    }
}
