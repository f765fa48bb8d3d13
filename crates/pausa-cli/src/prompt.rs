//! Interactive duration prompts.
//!
//! Renders the preset menus on stdout and reads selections from stdin. An
//! empty selection or EOF dismisses the prompt and no session starts; an
//! unrecognized choice or invalid custom entry falls back to the configured
//! default instead of failing the action.

use std::io::{self, BufRead, Write};

use pausa_core::prompt::{self, PromptSource};
use pausa_core::{Config, SessionConfig};

pub struct TerminalPrompt {
    default_work_secs: u64,
    default_break_secs: u64,
    auto_chain: bool,
}

impl TerminalPrompt {
    pub fn new(config: &Config) -> Self {
        let defaults = config.session_config();
        Self {
            default_work_secs: defaults.work_secs,
            default_break_secs: defaults.break_secs,
            auto_chain: defaults.auto_chain,
        }
    }

    /// Present a numbered preset menu. `None` means dismissed.
    fn pick(&self, title: &str, presets: &[&str], default_secs: u64) -> Option<u64> {
        println!("{title}:");
        for (index, preset) in presets.iter().enumerate() {
            println!("  {}) {preset}", index + 1);
        }
        let line = read_line("> ")?;
        if line.is_empty() {
            return None;
        }
        let choice = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| presets.get(index).copied());
        match choice {
            Some(prompt::CUSTOM_CHOICE) => self.custom(default_secs),
            Some(preset) => Some(prompt::preset_secs(preset, default_secs)),
            None => {
                println!("Unrecognized choice; using {} minutes.", default_secs / 60);
                Some(default_secs)
            }
        }
    }

    fn custom(&self, default_secs: u64) -> Option<u64> {
        let line = read_line("Custom time in minutes: ")?;
        match prompt::parse_custom_minutes(&line) {
            Ok(secs) => Some(secs),
            Err(err) => {
                println!("{err}; using {} minutes.", default_secs / 60);
                Some(default_secs)
            }
        }
    }
}

impl PromptSource for TerminalPrompt {
    fn session_config(&mut self) -> Option<SessionConfig> {
        let work_secs = self.pick(
            "Select work time",
            prompt::SESSION_PRESETS,
            self.default_work_secs,
        )?;
        let break_secs = self.pick(
            "Select break time",
            prompt::SESSION_PRESETS,
            self.default_break_secs,
        )?;
        Some(SessionConfig {
            work_secs,
            break_secs,
            auto_chain: self.auto_chain,
        })
    }

    fn break_duration(&mut self) -> Option<u64> {
        self.pick(
            "Select break time",
            prompt::BREAK_PRESETS,
            self.default_break_secs,
        )
    }
}

/// `None` on EOF or unreadable stdin.
fn read_line(question: &str) -> Option<String> {
    print!("{question}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}
