use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw messages from external sources (input, timers, system)
/// These represent unprocessed external events that need to be translated to
/// domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Quit,
    Suspend,
    Resume,

    // One second elapsed on the countdown ticker
    CountdownTick,

    // User input (raw keyboard events)
    Key(KeyEvent),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
