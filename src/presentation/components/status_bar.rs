//! Status bar component
//!
//! Bottom line: session phase and completion count on the left, key hints
//! on the right.

use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::{core::state::AppState, domain::session::Phase};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn draw(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let line = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);

        let mut status = state.phase().to_string();
        if state.session.completions > 0 {
            status.push_str(&format!(" · {} completed", state.session.completions));
        }

        let hints = hints_for(state);
        // Hints give way to the status on narrow terminals.
        let hints_width = hints.width() as u16;
        if hints_width + status.width() as u16 + 1 <= line.width {
            let chunks =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)])
                    .split(line);
            frame.render_widget(
                Paragraph::new(status).style(Style::default().fg(Color::Gray)),
                chunks[0],
            );
            frame.render_widget(
                Paragraph::new(hints)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Right),
                chunks[1],
            );
        } else {
            frame.render_widget(
                Paragraph::new(status).style(Style::default().fg(Color::Gray)),
                line,
            );
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

fn hints_for(state: &AppState) -> String {
    match state.phase() {
        Phase::Running => "Esc reset · Ctrl-C quit".to_string(),
        Phase::Completed | Phase::Ready | Phase::Idle => {
            let start = if state.session.completions > 0 {
                "Enter try again"
            } else {
                "Enter start"
            };
            let mut hints = format!("{start} · ");
            if state.session.duration_choices.len() > 1 {
                hints.push_str("Tab duration · ");
            }
            // The reset hint appears once a countdown was ever started,
            // like the reset control in the original widget.
            if state.session.has_started {
                hints.push_str("Esc reset · ");
            }
            hints.push_str("Ctrl-C quit");
            hints
        }
    }
}
