//! Duration prompts and the input-derivation policy.
//!
//! Hosts present the preset menus however they like; the rules here decide
//! what a selection is worth in seconds. Anything unparseable falls back to
//! the documented defaults instead of failing the action.

use crate::error::InputError;
use crate::timer::SessionConfig;

/// Default work phase length: 25 minutes.
pub const DEFAULT_WORK_SECS: u64 = 25 * 60;
/// Default break phase length: 5 minutes.
pub const DEFAULT_BREAK_SECS: u64 = 5 * 60;

/// Preset menu offered for both duration prompts of a work session.
pub const SESSION_PRESETS: &[&str] = &[
    "25 minutes",
    "15 minutes",
    "5 minutes (short break)",
    "Custom",
];

/// Preset menu offered for a standalone break.
pub const BREAK_PRESETS: &[&str] = &["5 minutes", "10 minutes", "15 minutes", "Custom"];

/// The preset entry that routes to free-form numeric entry.
pub const CUSTOM_CHOICE: &str = "Custom";

/// Supplies durations for new sessions.
///
/// Returning `None` means the user dismissed the prompt; no session starts.
pub trait PromptSource {
    /// Work and break durations for a full session.
    fn session_config(&mut self) -> Option<SessionConfig>;

    /// Duration for a standalone break, in seconds.
    fn break_duration(&mut self) -> Option<u64>;
}

/// Parse free-form minute entry into seconds.
///
/// Zero and non-numeric input are both rejected; callers substitute a
/// default rather than failing the whole action.
pub fn parse_custom_minutes(input: &str) -> Result<u64, InputError> {
    match input.trim().parse::<u64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes * 60),
        _ => Err(InputError::InvalidDuration {
            input: input.trim().to_string(),
        }),
    }
}

/// Seconds for a preset menu entry, e.g. `"25 minutes"` -> `1500`.
///
/// Entries lead with their minute count; anything else is worth
/// `default_secs`.
pub fn preset_secs(choice: &str, default_secs: u64) -> u64 {
    choice
        .split_whitespace()
        .next()
        .and_then(|lead| lead.parse::<u64>().ok())
        .filter(|minutes| *minutes > 0)
        .map(|minutes| minutes * 60)
        .unwrap_or(default_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_minutes_convert_to_seconds() {
        assert_eq!(parse_custom_minutes("25").unwrap(), 25 * 60);
        assert_eq!(parse_custom_minutes(" 1 ").unwrap(), 60);
    }

    #[test]
    fn custom_zero_and_garbage_are_rejected() {
        assert!(parse_custom_minutes("0").is_err());
        assert!(parse_custom_minutes("ten").is_err());
        assert!(parse_custom_minutes("").is_err());
        assert!(parse_custom_minutes("-5").is_err());
    }

    #[test]
    fn presets_lead_with_their_minute_count() {
        assert_eq!(preset_secs("25 minutes", DEFAULT_WORK_SECS), 25 * 60);
        assert_eq!(preset_secs("5 minutes (short break)", DEFAULT_WORK_SECS), 5 * 60);
        assert_eq!(preset_secs("10 minutes", DEFAULT_BREAK_SECS), 10 * 60);
    }

    #[test]
    fn unrecognized_choice_is_worth_the_default() {
        assert_eq!(preset_secs(CUSTOM_CHOICE, DEFAULT_WORK_SECS), DEFAULT_WORK_SECS);
        assert_eq!(preset_secs("", DEFAULT_BREAK_SECS), DEFAULT_BREAK_SECS);
    }
}
