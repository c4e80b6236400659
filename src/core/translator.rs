use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::msg::{session::SessionMsg, system::SystemMsg, Msg},
    core::raw_msg::RawMsg,
    core::state::AppState,
};

/// Longest accepted name, in characters; further input is ignored
const NAME_MAX_CHARS: usize = 64;

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],

        // Countdown ticker events
        RawMsg::CountdownTick => vec![Msg::Session(SessionMsg::Tick)],

        // User input - translate based on context
        RawMsg::Key(key) => translate_key_event(key, state),

        // Ignore frequent host events in the domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    let running = state.session.is_running();

    match key.code {
        KeyCode::Esc => vec![Msg::Session(SessionMsg::Reset)],

        // The start control is disabled unless the session can start;
        // rejecting here mirrors the disabled button in the original UI.
        KeyCode::Enter => {
            if state.can_start() {
                vec![Msg::Session(SessionMsg::Start)]
            } else {
                vec![]
            }
        }

        // Duration is only selectable while no countdown runs
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            if running {
                vec![]
            } else {
                vec![Msg::Session(SessionMsg::CycleDuration)]
            }
        }

        // Typing edits the name; the field is locked while running
        KeyCode::Char(c)
            if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() =>
        {
            if running || state.session.name.chars().count() >= NAME_MAX_CHARS {
                vec![]
            } else {
                let mut name = state.session.name.clone();
                name.push(c);
                vec![Msg::Session(SessionMsg::NameChanged(name))]
            }
        }

        KeyCode::Backspace => {
            if running || state.session.name.is_empty() {
                vec![]
            } else {
                let mut name = state.session.name.clone();
                name.pop();
                vec![Msg::Session(SessionMsg::NameChanged(name))]
            }
        }

        _ => vec![], // Unknown keys are ignored
    }
}
