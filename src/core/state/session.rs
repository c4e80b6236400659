use crate::{
    core::cmd::{Cmd, CountdownCmd},
    core::msg::session::SessionMsg,
    domain::session::{completion_message, next_choice, DurationChoices, Phase},
};

/// Countdown session state
///
/// Holds everything describing one countdown attempt, from name entry
/// through completion or reset. The phase is derived, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Name as typed, untrimmed; trimming only matters for the start gate
    pub name: String,
    /// Selected countdown length in seconds
    pub duration_secs: u64,
    /// Durations offered by the picker
    pub duration_choices: DurationChoices,
    /// Seconds left on the live countdown, `None` when none is running
    pub remaining_secs: Option<u64>,
    /// How many countdowns have reached zero
    pub completions: u32,
    /// Congratulatory message, present exactly in the completed phase
    pub status_message: Option<String>,
    /// Affirmation accompanying the status message
    pub quote: Option<String>,
    /// Whether any countdown was started since the last full reset
    pub has_started: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        let duration_choices = DurationChoices::default();
        Self {
            name: String::new(),
            duration_secs: duration_choices.first().copied().unwrap_or(10),
            duration_choices,
            remaining_secs: None,
            completions: 0,
            status_message: None,
            quote: None,
            has_started: false,
        }
    }
}

impl SessionState {
    /// Initialize from configuration, clamping the default duration to a
    /// configured choice.
    pub fn new(duration_secs: u64, duration_choices: DurationChoices) -> Self {
        let duration_secs = if duration_choices.contains(&duration_secs) {
            duration_secs
        } else {
            duration_choices.first().copied().unwrap_or(duration_secs)
        };
        Self {
            duration_secs,
            duration_choices,
            ..Default::default()
        }
    }

    /// Derive the current phase
    pub fn phase(&self) -> Phase {
        if self.remaining_secs.is_some() {
            Phase::Running
        } else if self.status_message.is_some() {
            Phase::Completed
        } else if !self.name.trim().is_empty() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// A countdown may start: trimmed name present and none running
    pub fn can_start(&self) -> bool {
        !self.name.trim().is_empty() && self.remaining_secs.is_none()
    }

    pub fn is_running(&self) -> bool {
        self.remaining_secs.is_some()
    }

    /// Fraction of the countdown elapsed, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        match self.remaining_secs {
            Some(remaining) if self.duration_secs > 0 => {
                (self.duration_secs.saturating_sub(remaining)) as f64 / self.duration_secs as f64
            }
            _ => 0.0,
        }
    }

    /// Session-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SessionMsg) -> Vec<Cmd> {
        match msg {
            SessionMsg::NameChanged(name) => {
                // Editing the name abandons any countdown or prior outcome.
                self.name = name;
                self.remaining_secs = None;
                self.status_message = None;
                self.quote = None;
                self.has_started = false;
                vec![
                    Cmd::Countdown(CountdownCmd::StopTicker),
                    Cmd::SaveName {
                        name: self.name.clone(),
                    },
                ]
            }

            SessionMsg::SelectDuration(secs) => {
                // Duration is immutable while a countdown runs.
                if self.remaining_secs.is_none() && self.duration_choices.contains(&secs) {
                    self.duration_secs = secs;
                }
                vec![]
            }

            SessionMsg::CycleDuration => {
                if self.remaining_secs.is_none() {
                    self.duration_secs = next_choice(&self.duration_choices, self.duration_secs);
                }
                vec![]
            }

            SessionMsg::Start => {
                if !self.can_start() {
                    return vec![];
                }
                self.status_message = None;
                self.quote = None;
                self.remaining_secs = Some(self.duration_secs);
                self.has_started = true;
                vec![Cmd::Countdown(CountdownCmd::StartTicker)]
            }

            SessionMsg::Tick => match self.remaining_secs {
                Some(remaining) if remaining > 1 => {
                    self.remaining_secs = Some(remaining - 1);
                    vec![]
                }
                Some(_) => {
                    // Final tick: complete in the same transition.
                    self.remaining_secs = None;
                    self.completions += 1;
                    self.status_message =
                        Some(completion_message(&self.name, self.completions));
                    vec![Cmd::Countdown(CountdownCmd::StopTicker), Cmd::PickQuote]
                }
                None => {
                    // Late tick after cancellation or reset.
                    log::debug!("countdown tick ignored: no active countdown");
                    vec![]
                }
            },

            SessionMsg::QuotePicked(quote) => {
                // A quote only accompanies a completion message; a pick that
                // raced a reset is discarded.
                if self.status_message.is_some() {
                    self.quote = Some(quote);
                }
                vec![]
            }

            SessionMsg::Reset => {
                self.name.clear();
                self.remaining_secs = None;
                self.status_message = None;
                self.quote = None;
                self.has_started = false;
                vec![Cmd::Countdown(CountdownCmd::StopTicker)]
            }
        }
    }
}
