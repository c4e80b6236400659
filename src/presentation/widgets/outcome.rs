use ratatui::{prelude::*, widgets::Paragraph};

/// Completion panel: congratulatory message with an optional affirmation
pub struct Outcome<'a> {
    message: &'a str,
    quote: Option<&'a str>,
}

impl<'a> Outcome<'a> {
    pub fn new(message: &'a str, quote: Option<&'a str>) -> Self {
        Self { message, quote }
    }
}

impl Widget for Outcome<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut lines = vec![Line::styled(
            self.message,
            Style::default().fg(Color::Blue).bold(),
        )];
        if let Some(quote) = self.quote {
            lines.push(Line::styled(
                format!("\u{201c}{quote}\u{201d}"),
                Style::default().fg(Color::Gray).italic(),
            ));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(widget: Outcome<'_>, area: Rect) -> String {
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_render_message_only() {
        let area = Rect::new(0, 0, 70, 2);
        let rendered = render_to_string(
            Outcome::new("You did it, Ada! You've completed the timer 1 times!", None),
            area,
        );
        assert!(rendered.contains("You did it, Ada!"));
        assert!(!rendered.contains('\u{201c}'));
    }

    #[test]
    fn test_render_message_with_quote() {
        let area = Rect::new(0, 0, 70, 2);
        let rendered = render_to_string(
            Outcome::new(
                "You did it, Ada! You've completed the timer 1 times!",
                Some("Dream it. Wish it. Do it."),
            ),
            area,
        );
        assert!(rendered.contains("Dream it. Wish it. Do it."));
        assert!(rendered.contains('\u{201c}'));
    }

    #[test]
    fn test_render_narrow_area_does_not_panic() {
        let area = Rect::new(0, 0, 8, 1);
        let _ = render_to_string(Outcome::new("You did it!", Some("Quote")), area);
    }
}
