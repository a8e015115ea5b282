//! Discord webhook channel
//!
//! Posts each notification as a single embed. Discord answers a successful
//! post with `204 No Content`; any non-2xx status is reported as a failure.

use super::notifier::Notifier;
use crate::domain::{Notification, Severity};
use crate::error::NotifyError;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::time::Duration;

/// Default footer source
pub const DEFAULT_SOURCE: &str = "Monitor SRE";

/// Default HTTP timeout for a delivery attempt
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Embed color for a severity
pub fn color_for(level: Severity) -> u32 {
    match level {
        Severity::Ok => 3_066_993, // green
        Severity::Warning => 16_776_960, // yellow
        Severity::Critical => 15_158_332, // red
    }
}

/// Title icon for a severity
pub fn icon_for(level: Severity) -> &'static str {
    match level {
        Severity::Ok => "✅",
        Severity::Warning => "⚠️",
        Severity::Critical => "🔥",
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload {
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    description: String,
    color: u32,
    timestamp: String,
    footer: Footer,
}

#[derive(Debug, Serialize)]
struct Footer {
    text: String,
}

/// Discord-compatible webhook notifier
pub struct DiscordNotifier {
    url: String,
    source: String,
    client: reqwest::blocking::Client,
}

impl DiscordNotifier {
    /// Create a notifier posting to `url`
    ///
    /// An empty `url` is accepted; every send then fails with
    /// `NotifyError::NotConfigured`.
    pub fn new(
        url: impl Into<String>,
        source: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            source: source.into(),
            client,
        })
    }

    /// Whether a webhook URL is set
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    fn payload(&self, notification: &Notification, at: DateTime<Utc>) -> WebhookPayload {
        WebhookPayload {
            embeds: vec![Embed {
                title: format!("{} {}", icon_for(notification.level), notification.title),
                description: notification.message.clone(),
                color: color_for(notification.level),
                timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
                footer: Footer {
                    text: format!("{} | {}", self.source, notification.level),
                },
            }],
        }
    }
}

impl Notifier for DiscordNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        if !self.is_configured() {
            return Err(NotifyError::NotConfigured("DISCORD_WEBHOOK".to_string()));
        }

        let payload = self.payload(notification, Utc::now());
        let response = self.client.post(&self.url).json(&payload).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::HttpStatus(status.as_u16()));
        }

        log::debug!("Delivered '{}' to Discord ({})", notification.title, status);
        Ok(())
    }

    fn name(&self) -> &str {
        "discord"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn notifier(url: &str) -> DiscordNotifier {
        DiscordNotifier::new(url, DEFAULT_SOURCE, DEFAULT_TIMEOUT).unwrap()
    }

    #[test]
    fn test_payload_shape() {
        let at = Utc.with_ymd_and_hms(2026, 2, 2, 10, 30, 0).unwrap();
        let n = Notification::alert(Severity::Critical, "Disk usage", "95% on /");
        let value = serde_json::to_value(notifier("http://x").payload(&n, at)).unwrap();

        let embed = &value["embeds"][0];
        assert_eq!(embed["title"], "🔥 CRITICAL: Disk usage");
        assert_eq!(embed["description"], "Disk usage: 95% on /");
        assert_eq!(embed["color"], 15_158_332);
        assert_eq!(embed["timestamp"], "2026-02-02T10:30:00.000Z");
        assert_eq!(embed["footer"]["text"], "Monitor SRE | CRITICAL");
    }

    #[test]
    fn test_recovery_payload_uses_ok_style() {
        let at = Utc.with_ymd_and_hms(2026, 2, 2, 10, 30, 0).unwrap();
        let n = Notification::new("RECOVERY: Disk OK", "back", Severity::Ok);
        let value = serde_json::to_value(notifier("http://x").payload(&n, at)).unwrap();

        assert_eq!(value["embeds"][0]["title"], "✅ RECOVERY: Disk OK");
        assert_eq!(value["embeds"][0]["color"], 3_066_993);
        assert_eq!(value["embeds"][0]["footer"]["text"], "Monitor SRE | OK");
    }

    #[test]
    fn test_unconfigured_webhook_fails() {
        let n = Notification::alert(Severity::Warning, "CPU idle", "15% idle");
        let err = notifier("").notify(&n).unwrap_err();
        assert!(matches!(err, NotifyError::NotConfigured(_)));
    }

    #[test]
    fn test_unreachable_webhook_fails() {
        let n = Notification::alert(Severity::Warning, "CPU idle", "15% idle");
        let short = DiscordNotifier::new("http://127.0.0.1:9", "test", Duration::from_secs(1))
            .unwrap();
        assert!(matches!(short.notify(&n), Err(NotifyError::Request(_))));
    }
}
