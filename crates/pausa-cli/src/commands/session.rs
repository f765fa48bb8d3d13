//! The start / break / stop command handlers.
//!
//! Each invocation hosts its own session: the handler resolves durations
//! (flags first, prompts otherwise), hands them to a [`SessionController`],
//! and stays in the foreground until the session ends. Ctrl+C is the live
//! stop control.

use std::sync::Arc;
use std::time::Duration;

use pausa_core::prompt::PromptSource;
use pausa_core::{Config, SessionConfig, SessionController, TimerError};
use tracing::debug;

use crate::prompt::TerminalPrompt;
use crate::sinks::{DesktopNotifier, StatusLine};

const ALREADY_RUNNING: &str = "Pomodoro is already running.";

type CliResult = Result<(), Box<dyn std::error::Error>>;

pub async fn start(
    work: Option<u64>,
    break_minutes: Option<u64>,
    no_chain: bool,
    tick_ms: u64,
) -> CliResult {
    let config = Config::load_or_default();
    let defaults = config.session_config();

    let session_config = if work.is_some() || break_minutes.is_some() {
        Some(SessionConfig {
            work_secs: minutes_or_default(work, defaults.work_secs),
            break_secs: minutes_or_default(break_minutes, defaults.break_secs),
            auto_chain: defaults.auto_chain,
        })
    } else {
        TerminalPrompt::new(&config).session_config()
    };

    let Some(mut session_config) = session_config else {
        println!("Cancelled.");
        return Ok(());
    };
    if no_chain {
        session_config.auto_chain = false;
    }

    debug!(
        work_secs = session_config.work_secs,
        break_secs = session_config.break_secs,
        auto_chain = session_config.auto_chain,
        "starting session"
    );

    let controller = controller(&config, tick_ms);
    if let Err(TimerError::AlreadyRunning) = controller.start_session(session_config) {
        println!("{ALREADY_RUNNING}");
        return Ok(());
    }
    wait(controller).await
}

pub async fn start_break(minutes: Option<u64>, tick_ms: u64) -> CliResult {
    let config = Config::load_or_default();
    let defaults = config.session_config();

    let duration_secs = match minutes {
        Some(_) => minutes_or_default(minutes, defaults.break_secs),
        None => match TerminalPrompt::new(&config).break_duration() {
            Some(secs) => secs,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        },
    };

    debug!(duration_secs, "starting standalone break");

    let controller = controller(&config, tick_ms);
    if let Err(TimerError::AlreadyRunning) = controller.start_break(duration_secs) {
        println!("{ALREADY_RUNNING}");
        return Ok(());
    }
    wait(controller).await
}

pub fn stop() -> CliResult {
    let config = Config::load_or_default();
    // Each invocation hosts its own session, so a fresh process has nothing
    // to stop; the controller surfaces that as feedback.
    controller(&config, 1000).stop_session();
    Ok(())
}

/// Minutes from user input, in seconds; zero or absent falls back.
fn minutes_or_default(minutes: Option<u64>, default_secs: u64) -> u64 {
    minutes
        .filter(|m| *m > 0)
        .map(|m| m * 60)
        .unwrap_or(default_secs)
}

fn controller(config: &Config, tick_ms: u64) -> SessionController {
    let display = Arc::new(StatusLine::new());
    let notifier = Arc::new(DesktopNotifier::new(config.notifications.enabled));
    SessionController::with_period(Duration::from_millis(tick_ms.max(1)), display, notifier)
}

/// Foreground-run the session: Ctrl+C stops it, a standalone break ends it.
async fn wait(controller: SessionController) -> CliResult {
    let stopper = controller.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, stopping session");
            stopper.stop_session();
        }
    });

    controller.finished().await;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_absent_minutes_fall_back() {
        assert_eq!(minutes_or_default(None, 1500), 1500);
        assert_eq!(minutes_or_default(Some(0), 1500), 1500);
        assert_eq!(minutes_or_default(Some(10), 1500), 600);
    }
}
