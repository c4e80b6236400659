use derive_deref::Deref;
use serde::{Deserialize, Serialize};
use strum::Display;

/// The countdown durations offered by the picker, in seconds.
///
/// Fixed at startup from configuration; a single-entry list pins the
/// duration and hides the picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Deref)]
pub struct DurationChoices(pub Vec<u64>);

impl Default for DurationChoices {
    fn default() -> Self {
        Self(vec![10, 20, 30])
    }
}

/// High-level phase of a countdown session, derived from `SessionState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Phase {
    /// No name committed, no countdown
    #[default]
    Idle,
    /// Name present, countdown not running
    Ready,
    /// Countdown active, decrementing once per second
    Running,
    /// Countdown reached zero, message displayed
    Completed,
}

/// Compose the congratulatory message shown when a countdown completes.
///
/// `completions` is the already-incremented total, so the very first
/// completion reads "1 times".
pub fn completion_message(name: &str, completions: u32) -> String {
    format!("You did it, {name}! You've completed the timer {completions} times!")
}

/// Next duration in the choice list, wrapping around.
///
/// An unknown `current` restarts at the first choice. Empty choice lists do
/// not occur (config validation rejects them); `current` is returned as a
/// fallback so this stays total.
pub fn next_choice(choices: &[u64], current: u64) -> u64 {
    let Some(first) = choices.first() else {
        return current;
    };
    match choices.iter().position(|&c| c == current) {
        Some(i) => choices[(i + 1) % choices.len()],
        None => *first,
    }
}
