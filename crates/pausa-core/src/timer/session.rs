//! Session state machine.
//!
//! The session is a countdown state machine with no notion of wall-clock
//! time. It owns the current phase and the seconds remaining in it, and it
//! decides every phase transition. It does not schedule anything itself -
//! a [`TickDriver`](super::TickDriver) (or a test) calls [`Session::tick`]
//! once per elapsed second.
//!
//! ## State transitions
//!
//! ```text
//! Idle --start--------> Work --0--> Break --0--> Work ... (until stop)
//! Idle --start_break--> Break --0--> Idle
//! ```
//!
//! A `start()`-originated session cycles Work/Break until an explicit
//! `stop()`; a `start_break()` session ends on its own.

use serde::{Deserialize, Serialize};

use crate::error::TimerError;
use crate::events::Event;

/// Display string shown while no session is active.
pub const IDLE_LABEL: &str = "Ready";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Work,
    Break,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Work => "Work",
            Phase::Break => "Break",
        }
    }
}

/// Work/break durations for one session.
///
/// Captured once when the session starts and reused verbatim across the
/// automatic Work/Break cycle. Changing durations requires a stop and a
/// fresh start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Work phase length in seconds.
    pub work_secs: u64,
    /// Break phase length in seconds.
    pub break_secs: u64,
    /// Chain back into a new work phase when a break runs out.
    #[serde(default = "default_auto_chain")]
    pub auto_chain: bool,
}

fn default_auto_chain() -> bool {
    true
}

impl SessionConfig {
    pub fn new(work_secs: u64, break_secs: u64) -> Self {
        Self {
            work_secs,
            break_secs,
            auto_chain: true,
        }
    }
}

/// Outcome of a single [`Session::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSignal {
    /// No session is active; the driver should detach.
    Idle,
    /// One second elapsed, the current phase continues.
    Running { remaining_secs: u64 },
    /// The phase ran out and the session chained into `next`.
    PhaseCompleted { completed: Phase, next: Phase },
    /// The final phase ran out; the session is Idle again.
    Finished { completed: Phase },
}

/// Single source of truth for the current phase and remaining time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    phase: Phase,
    /// Seconds left in the current phase.
    remaining_secs: u64,
    /// Present for `start()`-originated sessions; standalone breaks carry
    /// none, which is what makes their exhaustion terminal.
    config: Option<SessionConfig>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            remaining_secs: 0,
            config: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn config(&self) -> Option<SessionConfig> {
        self.config
    }

    /// Format the current state for the display sink.
    ///
    /// `M:SS` with unpadded minutes plus the phase label, or the fixed
    /// idle string when no session is active.
    pub fn render(&self) -> String {
        match self.phase {
            Phase::Idle => IDLE_LABEL.to_string(),
            phase => format!(
                "{}:{:02} ({})",
                self.remaining_secs / 60,
                self.remaining_secs % 60,
                phase.label()
            ),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin a work session that cycles into its break automatically.
    pub fn start(&mut self, config: SessionConfig) -> Result<Event, TimerError> {
        if self.is_active() {
            return Err(TimerError::AlreadyRunning);
        }
        self.phase = Phase::Work;
        self.remaining_secs = config.work_secs;
        self.config = Some(config);
        Ok(Event::session_started(&config))
    }

    /// Begin a standalone break, not chained to any work session.
    pub fn start_break(&mut self, duration_secs: u64) -> Result<Event, TimerError> {
        if self.is_active() {
            return Err(TimerError::AlreadyRunning);
        }
        self.phase = Phase::Break;
        self.remaining_secs = duration_secs;
        self.config = None;
        Ok(Event::break_started(duration_secs))
    }

    /// Advance one second. The cadence driver is the only caller while a
    /// session runs.
    pub fn tick(&mut self) -> TickSignal {
        if self.phase == Phase::Idle {
            return TickSignal::Idle;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
        }
        if self.remaining_secs > 0 {
            return TickSignal::Running {
                remaining_secs: self.remaining_secs,
            };
        }
        self.advance()
    }

    /// Stop the running session, if any.
    ///
    /// Returns `None` when idle so callers can surface "nothing to stop"
    /// feedback without treating it as a fault.
    pub fn stop(&mut self) -> Option<Event> {
        if !self.is_active() {
            return None;
        }
        self.phase = Phase::Idle;
        self.remaining_secs = 0;
        self.config = None;
        Some(Event::session_stopped())
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Phase transition on exhaustion.
    fn advance(&mut self) -> TickSignal {
        let completed = self.phase;
        match (completed, self.config) {
            (Phase::Work, Some(cfg)) => {
                self.phase = Phase::Break;
                self.remaining_secs = cfg.break_secs;
                TickSignal::PhaseCompleted {
                    completed,
                    next: Phase::Break,
                }
            }
            (Phase::Break, Some(cfg)) if cfg.auto_chain => {
                self.phase = Phase::Work;
                self.remaining_secs = cfg.work_secs;
                TickSignal::PhaseCompleted {
                    completed,
                    next: Phase::Work,
                }
            }
            _ => {
                // Standalone break, or a non-chaining session's break.
                self.phase = Phase::Idle;
                self.remaining_secs = 0;
                self.config = None;
                TickSignal::Finished { completed }
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
