//! TUI Renderer
//!
//! This module implements the TUI event loop and screen rendering.
//! It receives `UiEvent`s via channel and renders them using Ratatui.
//!
//! ## Design:
//! - Renderer owns UI state (scroll position, quit flag, pending alert)
//! - Renderer does NOT own data (receives view models via channel)
//! - Uses View widgets to render the screen
//! - Handles keyboard input for scrolling and alert dismissal

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

use super::UiEvent;
use crate::presentation::view_models::MenuScreenViewModel;
use crate::presentation::views::{AlertView, MenuListView};
use crate::ui::{centered_rect, fill_parent};

/// TUI Renderer application state
pub struct TuiRenderer {
    /// Current screen data (received from the controller)
    screen: MenuScreenViewModel,

    /// UI State: list scroll offset
    scroll: u16,

    /// UI State: should quit flag
    should_quit: bool,

    /// Pending modal alert message (if any)
    alert: Option<String>,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            screen: MenuScreenViewModel::default(),
            scroll: 0,
            should_quit: false,
            alert: None,
        }
    }

    /// Main event loop for TUI rendering
    ///
    /// This function:
    /// 1. Sets up terminal in raw mode
    /// 2. Receives view model updates via channel
    /// 3. Handles keyboard input
    /// 4. Renders the screen using Views
    /// 5. Cleans up terminal on exit
    pub fn run(mut self, rx: Receiver<UiEvent>) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Run event loop
        let result = self.event_loop(&mut terminal, rx);

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Main event loop
    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<UiEvent>,
    ) -> Result<()> {
        loop {
            // Draw current state
            terminal.draw(|f| self.render(f))?;

            // Handle keyboard with timeout (allows periodic redraws)
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }

            // Apply pending UI effects in queue order (non-blocking)
            while let Ok(ui_event) = rx.try_recv() {
                self.apply(ui_event);
            }

            // Exit if quit flag is set
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply one UI effect
    fn apply(&mut self, ui_event: UiEvent) {
        match ui_event {
            UiEvent::Update(screen) => {
                self.screen = *screen;
            }
            UiEvent::Alert(message) => {
                self.alert = Some(message);
            }
        }
    }

    /// Handle keyboard input
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        // An open alert swallows its dismissal keys first
        if self.alert.is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => {
                    self.alert = None;
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Scroll up
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            // Scroll down
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
            }
            // Page up
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
            }
            // Page down
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
            }
            // Home (top)
            KeyCode::Home => {
                self.scroll = 0;
            }
            _ => {}
        }
    }

    /// Render the screen using Views
    fn render(&self, f: &mut Frame) {
        let area = f.area();

        // The list fills the whole frame
        let list = MenuListView::new(&self.screen, self.scroll);
        fill_parent(list, area, f.buffer_mut());

        // Modal alert on top, if armed
        if let Some(message) = &self.alert {
            let popup = centered_rect(44, 7, area);
            f.render_widget(AlertView::new(message), popup);
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::RowViewModel;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_with_rows(count: usize) -> MenuScreenViewModel {
        let rows = (0..count)
            .map(|i| RowViewModel {
                title: format!("Pizza {}", i),
                subtitle: "Price: 9.00".to_string(),
            })
            .collect();
        MenuScreenViewModel { rows }
    }

    #[test]
    fn test_update_replaces_the_screen_without_accumulation() {
        let mut renderer = TuiRenderer::new();

        renderer.apply(UiEvent::Update(Box::new(screen_with_rows(3))));
        assert_eq!(renderer.screen.row_count(), 3);

        renderer.apply(UiEvent::Update(Box::new(screen_with_rows(3))));
        assert_eq!(renderer.screen.row_count(), 3);
    }

    #[test]
    fn test_alert_is_armed_and_dismissed() {
        let mut renderer = TuiRenderer::new();

        renderer.apply(UiEvent::Alert("oops".to_string()));
        assert!(renderer.alert.is_some());

        renderer.handle_key_event(press(KeyCode::Enter));
        assert!(renderer.alert.is_none());
        assert!(!renderer.should_quit);
    }

    #[test]
    fn test_esc_dismisses_the_alert_before_quitting() {
        let mut renderer = TuiRenderer::new();
        renderer.apply(UiEvent::Alert("oops".to_string()));

        renderer.handle_key_event(press(KeyCode::Esc));
        assert!(renderer.alert.is_none());
        assert!(!renderer.should_quit);

        renderer.handle_key_event(press(KeyCode::Esc));
        assert!(renderer.should_quit);
    }

    #[test]
    fn test_scroll_keys_move_the_window() {
        let mut renderer = TuiRenderer::new();
        renderer.apply(UiEvent::Update(Box::new(screen_with_rows(30))));

        renderer.handle_key_event(press(KeyCode::Down));
        renderer.handle_key_event(press(KeyCode::Down));
        assert_eq!(renderer.scroll, 2);

        renderer.handle_key_event(press(KeyCode::Up));
        assert_eq!(renderer.scroll, 1);

        renderer.handle_key_event(press(KeyCode::PageDown));
        assert_eq!(renderer.scroll, 11);

        renderer.handle_key_event(press(KeyCode::Home));
        assert_eq!(renderer.scroll, 0);

        // Never scrolls above the top
        renderer.handle_key_event(press(KeyCode::Up));
        assert_eq!(renderer.scroll, 0);
    }

    #[test]
    fn test_q_sets_the_quit_flag() {
        let mut renderer = TuiRenderer::new();
        renderer.handle_key_event(press(KeyCode::Char('q')));
        assert!(renderer.should_quit);
    }
}
