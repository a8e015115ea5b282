//! Notification system
//!
//! Best-effort delivery of alert and recovery notices to log and webhook
//! channels.

mod notifier;
mod webhook;

pub use notifier::{LogNotifier, NotificationManager, Notifier};
pub use webhook::{color_for, icon_for, DiscordNotifier, DEFAULT_SOURCE, DEFAULT_TIMEOUT};
