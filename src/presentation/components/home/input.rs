//! Name input component
//!
//! Handles the single-line name field.

use ratatui::{prelude::*, widgets::*};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::AppState;

/// Name input component
///
/// A stateless component: the internal TextArea is only a rendering vehicle
/// and is re-synced from `AppState` before every draw. While a countdown
/// runs the field renders as locked, mirroring the disabled input of the
/// state machine's translation layer.
pub struct NameInput<'a> {
    /// Internal TextArea widget for rendering
    textarea: TextArea<'a>,
    /// Last synced name (for dirty checking)
    last_synced: String,
}

impl NameInput<'_> {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Type your name");
        Self {
            textarea,
            last_synced: String::new(),
        }
    }

    /// Render the name field, syncing the TextArea with AppState first
    pub fn view(&mut self, state: &AppState, frame: &mut Frame, area: Rect) {
        if state.session.name != self.last_synced {
            let mut textarea = TextArea::new(vec![state.session.name.clone()]);
            textarea.set_cursor_line_style(Style::default());
            textarea.set_placeholder_text("Type your name");
            textarea.move_cursor(CursorMove::End);
            self.last_synced = state.session.name.clone();
            self.textarea = textarea;
        }

        let block = if state.session.is_running() {
            Block::default()
                .borders(Borders::ALL)
                .title("Your name (locked)")
                .style(Style::default().dim())
        } else {
            Block::default().borders(Borders::ALL).title("Your name")
        };
        self.textarea.set_block(block);

        frame.render_widget(&self.textarea, area);
    }

    /// The content currently mirrored into the TextArea
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }
}

impl Default for NameInput<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::config::Config;

    fn draw(input: &mut NameInput<'_>, state: &AppState) {
        let backend = ratatui::backend::TestBackend::new(40, 3);
        let mut terminal = ratatui::Terminal::new(backend).expect("terminal");
        terminal
            .draw(|f| input.view(state, f, f.area()))
            .expect("draw");
    }

    #[test]
    fn test_syncs_name_from_state() {
        let mut input = NameInput::new();
        let state = AppState::new(Config::default()).with_saved_name(Some("Ada".to_string()));

        draw(&mut input, &state);

        assert_eq!(input.content(), "Ada");
    }

    #[test]
    fn test_resync_on_state_change() {
        let mut input = NameInput::new();
        let mut state = AppState::new(Config::default()).with_saved_name(Some("Ada".to_string()));

        draw(&mut input, &state);
        state.session.name = "Grace".to_string();
        draw(&mut input, &state);

        assert_eq!(input.content(), "Grace");
    }

    #[test]
    fn test_empty_name_renders_placeholder() {
        let mut input = NameInput::new();
        let state = AppState::new(Config::default());

        draw(&mut input, &state);

        assert_eq!(input.content(), "");
    }
}
