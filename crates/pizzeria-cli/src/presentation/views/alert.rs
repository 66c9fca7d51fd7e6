//! Modal alert rendered above the list on load failure.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Single-message acknowledgment dialog with one dismissal action.
pub struct AlertView<'a> {
    message: &'a str,
}

impl<'a> AlertView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for AlertView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear whatever the list drew underneath the popup
        Clear.render(area, buf);

        let block = Block::default().title("Alert").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(self.message, Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to dismiss",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
    }
}
