//! Configuration builder
//!
//! Merges configuration from files, environment and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;
use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// With `None`, the default locations are searched and a missing file
    /// keeps the defaults. An explicit path must exist.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override the state directory
    pub fn with_state_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(d) = dir {
            self.config.general.state_dir = d;
        }
        self
    }

    /// Override per-check locking
    pub fn with_lock_state(mut self, lock: bool) -> Self {
        if lock {
            self.config.general.lock_state = true;
        }
        self
    }

    /// Override the notification master switch
    pub fn with_notifications_enabled(mut self, enabled: Option<bool>) -> Self {
        if let Some(e) = enabled {
            self.config.notifications.enabled = e;
        }
        self
    }

    /// Override the webhook URL
    pub fn with_webhook(mut self, url: Option<String>) -> Self {
        if let Some(u) = url {
            self.config.notifications.discord_webhook = Some(u);
        }
        self
    }

    /// Override CPU thresholds
    pub fn with_cpu_thresholds(mut self, warning: Option<f64>, critical: Option<f64>) -> Self {
        if let Some(w) = warning {
            self.config.cpu.warning = w;
        }
        if let Some(c) = critical {
            self.config.cpu.critical = c;
        }
        self
    }

    /// Override memory thresholds
    pub fn with_memory_thresholds(mut self, warning: Option<f64>, critical: Option<f64>) -> Self {
        if let Some(w) = warning {
            self.config.memory.warning = w;
        }
        if let Some(c) = critical {
            self.config.memory.critical = c;
        }
        self
    }

    /// Override disk thresholds and path
    pub fn with_disk(
        mut self,
        warning: Option<f64>,
        critical: Option<f64>,
        path: Option<String>,
    ) -> Self {
        if let Some(w) = warning {
            self.config.disk.warning = w;
        }
        if let Some(c) = critical {
            self.config.disk.critical = c;
        }
        if let Some(p) = path {
            self.config.disk.path = p;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
