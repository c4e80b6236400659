//! Duration picker component

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

/// Duration picker rendered as tabs over the configured choices
///
/// Hidden entirely when only one duration is configured (the fixed-duration
/// variant). Dimmed while a countdown runs, when the selection is locked.
pub struct DurationPicker;

impl DurationPicker {
    pub fn new() -> Self {
        Self
    }

    /// Whether the picker occupies space for the given state
    pub fn is_visible(state: &AppState) -> bool {
        state.session.duration_choices.len() > 1
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !Self::is_visible(state) {
            return;
        }

        let titles: Vec<String> = state
            .session
            .duration_choices
            .iter()
            .map(|secs| format!("{secs} s"))
            .collect();
        let selected = state
            .session
            .duration_choices
            .iter()
            .position(|&secs| secs == state.session.duration_secs)
            .unwrap_or(0);

        let style = if state.session.is_running() {
            Style::default().dim()
        } else {
            Style::default()
        };

        let tabs = Tabs::new(titles)
            .select(selected)
            .block(Block::default().borders(Borders::ALL).title("Duration"))
            .style(style)
            .highlight_style(Style::default().fg(Color::Yellow).bold());

        frame.render_widget(tabs, area);
    }
}

impl Default for DurationPicker {
    fn default() -> Self {
        Self::new()
    }
}
