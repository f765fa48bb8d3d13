//! Host-facing output capabilities.
//!
//! The core pushes countdown state through these traits and never learns how
//! it is presented - a status bar, a terminal line, a test buffer.

/// A persistent one-line text label, updated once per tick.
///
/// Must render even when no session is active (the idle string).
pub trait DisplaySink: Send + Sync {
    fn set_text(&self, text: &str);
}

/// A short-lived, non-blocking user-visible message.
///
/// The core does not depend on delivery or acknowledgment.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str);
}
