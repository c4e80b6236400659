//! Home component
//!
//! Lays out the whole timer screen: name input, duration picker, progress
//! gauge, countdown line and outcome panel, in a centered column.

pub mod duration;
pub mod input;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::AppState,
    presentation::widgets::{countdown_gauge::CountdownGauge, outcome::Outcome},
};

use duration::DurationPicker;
use input::NameInput;

/// Widest the centered column gets, in cells
const COLUMN_MAX_WIDTH: u16 = 56;

pub struct Home<'a> {
    input: NameInput<'a>,
    duration: DurationPicker,
}

impl Home<'_> {
    pub fn new() -> Self {
        Self {
            input: NameInput::new(),
            duration: DurationPicker::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let column = centered_column(area);

        let show_picker = DurationPicker::is_visible(state);
        let running = state.session.is_running();
        let completed = state.session.status_message.is_some();

        let mut constraints = vec![
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(3), // name input
        ];
        if show_picker {
            constraints.push(Constraint::Length(3));
        }
        if running {
            constraints.push(Constraint::Length(3)); // gauge
            constraints.push(Constraint::Length(1)); // countdown line
        }
        if completed {
            constraints.push(Constraint::Length(1));
            constraints.push(Constraint::Length(2)); // message + quote
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::vertical(constraints).split(column);
        let mut next = 0;
        let mut chunk = || {
            let rect = chunks[next];
            next += 1;
            rect
        };

        frame.render_widget(
            Paragraph::new(env!("CARGO_PKG_NAME"))
                .bold()
                .alignment(Alignment::Center),
            chunk(),
        );
        chunk(); // spacer

        self.input.view(state, frame, chunk());

        if show_picker {
            self.duration.view(state, frame, chunk());
        }

        if let Some(remaining) = state.session.remaining_secs {
            frame.render_widget(
                CountdownGauge::new(state.session.duration_secs, remaining),
                chunk(),
            );
            frame.render_widget(countdown_line(state, remaining), chunk());
        }

        if let Some(message) = &state.session.status_message {
            chunk(); // spacer
            frame.render_widget(
                Outcome::new(message, state.session.quote.as_deref()),
                chunk(),
            );
        }
    }
}

impl Default for Home<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn countdown_line(state: &AppState, remaining: u64) -> Paragraph<'_> {
    let line = Line::from(vec![
        Span::styled(state.session.name.clone(), Style::default().bold()),
        Span::raw(format!(", there are {remaining} seconds left")),
    ]);
    Paragraph::new(line).alignment(Alignment::Center)
}

fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(COLUMN_MAX_WIDTH);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, area.height)
}
