use ratatui::{prelude::*, widgets::*};

/// Progress bar for the live countdown, filling up as time elapses
pub struct CountdownGauge {
    duration_secs: u64,
    remaining_secs: u64,
}

impl CountdownGauge {
    pub fn new(duration_secs: u64, remaining_secs: u64) -> Self {
        Self {
            duration_secs,
            remaining_secs,
        }
    }

    fn ratio(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        let elapsed = self.duration_secs.saturating_sub(self.remaining_secs);
        (elapsed as f64 / self.duration_secs as f64).clamp(0.0, 1.0)
    }
}

impl Widget for CountdownGauge {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let label = format!("{} s left", self.remaining_secs);
        Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Countdown"))
            .gauge_style(Style::default().fg(Color::Blue))
            .ratio(self.ratio())
            .label(label)
            .render(area, buf);
    }
}
