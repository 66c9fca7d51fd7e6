//! Console renderer: one line per row, for pipes and scripts.

use std::sync::mpsc::Receiver;

use anyhow::Result;
use owo_colors::OwoColorize;

use super::UiEvent;
use crate::presentation::view_models::MenuScreenViewModel;

/// Non-interactive fallback. Drains the same event channel as the TUI,
/// so effects are observed in the same order.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn run(self, rx: Receiver<UiEvent>) -> Result<()> {
        let mut screen = MenuScreenViewModel::default();
        let mut alert = None;

        while let Ok(ui_event) = rx.recv() {
            match ui_event {
                UiEvent::Update(update) => screen = *update,
                UiEvent::Alert(message) => alert = Some(message),
            }
        }

        if let Some(message) = &alert {
            eprintln!("{}", message.red().bold());
        }

        if screen.rows.is_empty() {
            println!("{}", "No pizzas on the menu.".dimmed());
        } else {
            for row in &screen.rows {
                println!("{}  {}", row.title.bold(), row.subtitle);
            }
        }

        Ok(())
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}
