//! Command surface glue: one owned session, one cadence driver.
//!
//! Host command handlers act through a [`SessionController`] instead of
//! process-wide mutable timer handles. The already-running guard lives here,
//! in front of both the state machine and its driver, so two call sites can
//! never race a start. The controller is a cheap clone of a shared handle;
//! hosts hand a clone to whatever task maps user input to the stop action.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::error::TimerError;
use crate::events::Event;
use crate::sinks::{DisplaySink, NotificationSink};
use crate::timer::driver::TickDriver;
use crate::timer::session::{Session, SessionConfig, IDLE_LABEL};

/// Feedback for a stop request with no running session.
pub const NOTHING_TO_STOP: &str = "No Pomodoro running.";

#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Inner>,
}

struct Inner {
    session: Arc<Mutex<Session>>,
    driver: Mutex<TickDriver>,
    display: Arc<dyn DisplaySink>,
    notifier: Arc<dyn NotificationSink>,
}

impl SessionController {
    pub fn new(display: Arc<dyn DisplaySink>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self::with_driver(TickDriver::new(), display, notifier)
    }

    /// A controller with a non-default cadence, for tests and development.
    pub fn with_period(
        period: Duration,
        display: Arc<dyn DisplaySink>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self::with_driver(TickDriver::with_period(period), display, notifier)
    }

    fn with_driver(
        driver: TickDriver,
        display: Arc<dyn DisplaySink>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                session: Arc::new(Mutex::new(Session::new())),
                driver: Mutex::new(driver),
                display,
                notifier,
            }),
        }
    }

    /// The `start-session` action.
    pub fn start_session(&self, config: SessionConfig) -> Result<(), TimerError> {
        self.launch(|session| session.start(config))
    }

    /// The `start-break` action: a standalone break.
    pub fn start_break(&self, duration_secs: u64) -> Result<(), TimerError> {
        self.launch(|session| session.start_break(duration_secs))
    }

    /// The `stop-session` action. Always succeeds; stopping with nothing
    /// running is feedback, not a fault.
    pub fn stop_session(&self) {
        let mut driver = self
            .inner
            .driver
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        driver.detach();

        let stopped = self
            .inner
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .stop();
        match stopped {
            Some(event) => {
                self.inner.notifier.notify(event.message());
                self.inner.display.set_text(IDLE_LABEL);
            }
            None => self.inner.notifier.notify(NOTHING_TO_STOP),
        }
    }

    /// Resolves when the running session ends - by `stop_session` or by a
    /// standalone break running out.
    pub fn finished(&self) -> impl Future<Output = ()> + Send + 'static {
        self.inner
            .driver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .finished()
    }

    fn launch(
        &self,
        enter: impl FnOnce(&mut Session) -> Result<Event, TimerError>,
    ) -> Result<(), TimerError> {
        let mut driver = self
            .inner
            .driver
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if driver.is_attached() {
            return Err(TimerError::AlreadyRunning);
        }

        let event = {
            let mut session = self
                .inner
                .session
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let event = enter(&mut session)?;
            self.inner.display.set_text(&session.render());
            event
        };
        self.inner.notifier.notify(event.message());

        driver.attach(
            Arc::clone(&self.inner.session),
            Arc::clone(&self.inner.display),
            Arc::clone(&self.inner.notifier),
        )
    }
}
