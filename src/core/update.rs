use crate::{
    core::cmd::Cmd,
    core::msg::Msg,
    core::state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
///
/// Sub-state reducers stay configuration-free; this coordinator applies
/// config policy to the commands they emit (quote picking and name
/// persistence can each be switched off).
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Session messages (delegated to SessionState)
        Msg::Session(session_msg) => {
            let mut commands = state.session.update(session_msg);
            if !state.config.config.quotes_enabled {
                commands.retain(|cmd| !matches!(cmd, Cmd::PickQuote));
            }
            if !state.config.config.persist_name {
                commands.retain(|cmd| !matches!(cmd, Cmd::SaveName { .. }));
            }
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }
    }
}
