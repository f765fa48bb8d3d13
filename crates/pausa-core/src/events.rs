//! User-visible state changes.
//!
//! Every command and phase transition produces an [`Event`]. Hosts surface
//! [`Event::message`] through their notification sink; the payload itself is
//! serializable for structured output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, SessionConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        work_secs: u64,
        break_secs: u64,
        at: DateTime<Utc>,
    },
    /// A standalone break, started without a surrounding work session.
    BreakStarted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// A phase ran out. `next` is `Phase::Idle` when the session ended with it.
    PhaseCompleted {
        completed: Phase,
        next: Phase,
        at: DateTime<Utc>,
    },
    SessionStopped {
        at: DateTime<Utc>,
    },
}

impl Event {
    pub(crate) fn session_started(config: &SessionConfig) -> Self {
        Event::SessionStarted {
            work_secs: config.work_secs,
            break_secs: config.break_secs,
            at: Utc::now(),
        }
    }

    pub(crate) fn break_started(duration_secs: u64) -> Self {
        Event::BreakStarted {
            duration_secs,
            at: Utc::now(),
        }
    }

    pub(crate) fn phase_completed(completed: Phase, next: Phase) -> Self {
        Event::PhaseCompleted {
            completed,
            next,
            at: Utc::now(),
        }
    }

    pub(crate) fn session_stopped() -> Self {
        Event::SessionStopped { at: Utc::now() }
    }

    /// One-line notification text for this event.
    pub fn message(&self) -> &'static str {
        match self {
            Event::SessionStarted { .. } => "Pomodoro started!",
            Event::BreakStarted { .. } => "Break started.",
            Event::PhaseCompleted {
                completed: Phase::Work,
                ..
            } => "Pomodoro complete! Time for a break.",
            Event::PhaseCompleted { .. } => "Break complete! Time to get back to work.",
            Event::SessionStopped { .. } => "Pomodoro stopped.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_completion_messages_depend_on_the_finished_phase() {
        let work_done = Event::phase_completed(Phase::Work, Phase::Break);
        assert_eq!(work_done.message(), "Pomodoro complete! Time for a break.");

        let break_done = Event::phase_completed(Phase::Break, Phase::Work);
        assert_eq!(
            break_done.message(),
            "Break complete! Time to get back to work."
        );

        // A terminal break reads the same as a chained one.
        let last_break = Event::phase_completed(Phase::Break, Phase::Idle);
        assert_eq!(last_break.message(), break_done.message());
    }

    #[test]
    fn events_tag_their_type_when_serialized() {
        let event = Event::session_stopped();
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"SessionStopped\""));
    }
}
