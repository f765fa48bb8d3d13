//! Terminal display and notification sinks.

use std::io::Write;

use chrono::Local;
use notify_rust::Notification;
use pausa_core::{DisplaySink, NotificationSink};
use tracing::debug;

/// Rewrites a single status line in place, like a status bar label.
pub struct StatusLine;

impl StatusLine {
    pub fn new() -> Self {
        StatusLine
    }
}

impl DisplaySink for StatusLine {
    fn set_text(&self, text: &str) {
        print!("\r\x1b[2K{text}");
        let _ = std::io::stdout().flush();
    }
}

/// Prints timestamped lines and raises a desktop popup when enabled.
pub struct DesktopNotifier {
    desktop: bool,
}

impl DesktopNotifier {
    pub fn new(desktop: bool) -> Self {
        Self { desktop }
    }
}

impl NotificationSink for DesktopNotifier {
    fn notify(&self, message: &str) {
        // Clear the status line so countdown fragments don't bleed into
        // the message.
        print!("\r\x1b[2K");
        println!("[{}] {message}", Local::now().format("%H:%M:%S"));
        if self.desktop {
            if let Err(e) = Notification::new().summary("Pausa").body(message).show() {
                debug!("desktop notification failed: {e}");
            }
        }
    }
}
