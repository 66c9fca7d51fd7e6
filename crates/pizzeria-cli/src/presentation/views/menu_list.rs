//! Menu List View
//!
//! Renders the single-column pizza list with the scroll window applied.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

use crate::presentation::view_models::MenuScreenViewModel;

/// Menu list view wrapper
pub struct MenuListView<'a> {
    screen: &'a MenuScreenViewModel,
    scroll: u16,
}

impl<'a> MenuListView<'a> {
    pub fn new(screen: &'a MenuScreenViewModel, scroll: u16) -> Self {
        Self { screen, scroll }
    }
}

impl Widget for MenuListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.screen.rows.is_empty() {
            let block = Block::default().title("Pizzas").borders(Borders::ALL);
            let empty = Paragraph::new("No pizzas on the menu.").block(block);
            empty.render(area, buf);
            return;
        }

        let block = Block::default()
            .title(format!("Pizzas ({})", self.screen.row_count()))
            .borders(Borders::ALL);

        let inner = block.inner(area);
        block.render(area, buf);

        // Scroll offset clamped so the last row stays reachable
        let skip = (self.scroll as usize).min(self.screen.row_count() - 1);

        let items: Vec<ListItem> = self
            .screen
            .rows
            .iter()
            .skip(skip)
            .map(|row| {
                let title = Line::from(Span::styled(
                    row.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                let subtitle = Line::from(Span::raw(row.subtitle.clone()));

                ListItem::new(vec![title, subtitle])
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}
