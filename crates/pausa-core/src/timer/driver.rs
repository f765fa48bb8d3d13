//! Tick scheduler.
//!
//! Translates wall-clock time into discrete [`Session::tick`] calls at a
//! fixed cadence, one second per tick. The driver holds at most one
//! outstanding cadence task, so no tick is ever skipped or duplicated;
//! `detach()` cancels the next firing and is safe to call repeatedly.
//!
//! Cadence failures are not retried - if the task dies, the display goes
//! stale but no state corrupts.

use std::future::Future;
use std::pin::pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::TimerError;
use crate::events::Event;
use crate::sinks::{DisplaySink, NotificationSink};
use crate::timer::session::{Phase, Session, TickSignal, IDLE_LABEL};

/// Default cadence: one tick per second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One live cadence task and its cancellation flag.
struct CadenceTask {
    active: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Drives a shared [`Session`] at a fixed cadence.
pub struct TickDriver {
    period: Duration,
    finished: Arc<Notify>,
    task: Option<CadenceTask>,
}

impl TickDriver {
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// A driver with a non-default cadence, for tests and development.
    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            finished: Arc::new(Notify::new()),
            task: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.task
            .as_ref()
            .is_some_and(|task| task.active.load(Ordering::SeqCst))
    }

    /// Begin periodic invocation of `tick()` on `session`.
    ///
    /// Rejects a second attachment while a cadence task is live.
    pub fn attach(
        &mut self,
        session: Arc<Mutex<Session>>,
        display: Arc<dyn DisplaySink>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Result<(), TimerError> {
        if self.is_attached() {
            return Err(TimerError::AlreadyRunning);
        }

        let active = Arc::new(AtomicBool::new(true));
        let task_active = Arc::clone(&active);
        let finished = Arc::clone(&self.finished);
        let period = self.period;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; the countdown
            // starts one full period after attach.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let mut session = session
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                // A stop issued while this firing was pending must win: do
                // not let a cancelled session transition phases.
                if !task_active.load(Ordering::SeqCst) {
                    break;
                }
                match session.tick() {
                    TickSignal::Running { .. } => {
                        display.set_text(&session.render());
                    }
                    TickSignal::PhaseCompleted { completed, next } => {
                        notifier.notify(Event::phase_completed(completed, next).message());
                        display.set_text(&session.render());
                    }
                    TickSignal::Finished { completed } => {
                        notifier.notify(
                            Event::phase_completed(completed, Phase::Idle).message(),
                        );
                        display.set_text(IDLE_LABEL);
                        break;
                    }
                    TickSignal::Idle => break,
                }
            }
            task_active.store(false, Ordering::SeqCst);
            finished.notify_waiters();
        });

        self.task = Some(CadenceTask { active, handle });
        Ok(())
    }

    /// Cancel the next scheduled firing. Idempotent.
    pub fn detach(&mut self) {
        if let Some(task) = self.task.take() {
            task.active.store(false, Ordering::SeqCst);
            // The tick body holds no await point, so an abort only ever
            // lands on the wait between firings.
            task.handle.abort();
        }
        self.finished.notify_waiters();
    }

    /// Resolves once the cadence task ends - on its own (a standalone break
    /// running out) or through `detach()`. Resolves immediately when nothing
    /// is attached.
    pub fn finished(&self) -> impl Future<Output = ()> + Send + 'static {
        let notify = Arc::clone(&self.finished);
        let active = self.task.as_ref().map(|task| Arc::clone(&task.active));
        async move {
            let Some(active) = active else { return };
            let mut notified = pin!(notify.notified());
            notified.as_mut().enable();
            if !active.load(Ordering::SeqCst) {
                return;
            }
            notified.await;
        }
    }
}

impl Default for TickDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::timer::session::SessionConfig;

    #[derive(Default)]
    struct Recorder(StdMutex<Vec<String>>);

    impl Recorder {
        fn lines(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    impl DisplaySink for Recorder {
        fn set_text(&self, text: &str) {
            self.0.lock().unwrap().push(text.to_string());
        }
    }

    impl NotificationSink for Recorder {
        fn notify(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    fn shared(session: Session) -> Arc<Mutex<Session>> {
        Arc::new(Mutex::new(session))
    }

    #[tokio::test]
    async fn standalone_break_runs_to_completion() {
        let mut session = Session::new();
        session.start_break(2).unwrap();
        let session = shared(session);

        let display = Arc::new(Recorder::default());
        let notifier = Arc::new(Recorder::default());
        let mut driver = TickDriver::with_period(Duration::from_millis(5));
        driver
            .attach(Arc::clone(&session), display.clone(), notifier.clone())
            .unwrap();

        tokio::time::timeout(Duration::from_secs(2), driver.finished())
            .await
            .expect("break session should finish on its own");

        assert!(!driver.is_attached());
        assert_eq!(session.lock().unwrap().phase(), Phase::Idle);
        assert_eq!(display.lines().last().map(String::as_str), Some("Ready"));
        assert_eq!(
            notifier.lines(),
            vec!["Break complete! Time to get back to work."]
        );
    }

    #[tokio::test]
    async fn chained_session_keeps_cycling_until_detached() {
        let mut session = Session::new();
        session.start(SessionConfig::new(1, 1)).unwrap();
        let session = shared(session);

        let display = Arc::new(Recorder::default());
        let notifier = Arc::new(Recorder::default());
        let mut driver = TickDriver::with_period(Duration::from_millis(5));
        driver
            .attach(Arc::clone(&session), display.clone(), notifier.clone())
            .unwrap();

        // Long enough for several work/break alternations.
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(driver.is_attached());
        driver.detach();

        let messages = notifier.lines();
        assert!(messages.contains(&"Pomodoro complete! Time for a break.".to_string()));
        assert!(messages.contains(&"Break complete! Time to get back to work.".to_string()));
        assert!(session.lock().unwrap().is_active());
    }

    #[tokio::test]
    async fn attach_twice_is_rejected() {
        let mut session = Session::new();
        session.start_break(60).unwrap();
        let session = shared(session);

        let display = Arc::new(Recorder::default());
        let notifier = Arc::new(Recorder::default());
        let mut driver = TickDriver::with_period(Duration::from_millis(5));
        driver
            .attach(Arc::clone(&session), display.clone(), notifier.clone())
            .unwrap();

        let err = driver
            .attach(session, display, notifier)
            .unwrap_err();
        assert!(matches!(err, TimerError::AlreadyRunning));
    }

    #[tokio::test]
    async fn detach_is_idempotent_and_finished_resolves() {
        let mut session = Session::new();
        session.start(SessionConfig::new(60, 60)).unwrap();
        let session = shared(session);

        let mut driver = TickDriver::with_period(Duration::from_millis(5));
        driver
            .attach(
                session,
                Arc::new(Recorder::default()),
                Arc::new(Recorder::default()),
            )
            .unwrap();

        driver.detach();
        driver.detach();
        assert!(!driver.is_attached());

        tokio::time::timeout(Duration::from_millis(100), driver.finished())
            .await
            .expect("finished() must resolve after detach");
    }

    #[tokio::test]
    async fn finished_resolves_immediately_when_never_attached() {
        let driver = TickDriver::with_period(Duration::from_millis(5));
        tokio::time::timeout(Duration::from_millis(50), driver.finished())
            .await
            .expect("no cadence task means nothing to wait for");
    }
}
