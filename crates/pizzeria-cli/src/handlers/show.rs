//! Show Handler
//!
//! This module implements the controller that:
//! - Owns the load state machine (one-shot, terminal in both branches)
//! - Resolves and parses the menu resource
//! - Sends the resulting screen (or the failure alert) to the renderer
//!   over a channel

use std::path::Path;
use std::sync::mpsc::{self, Sender};
use std::thread;

use anyhow::Result;
use pizzeria_types::load_catalog;

use crate::args::RenderMode;
use crate::presentation::presenter::build_menu_screen;
use crate::presentation::renderers::{ConsoleRenderer, TuiRenderer, UiEvent};

/// Fixed user-facing message for any load failure. The underlying cause
/// (missing file vs. malformed file) is intentionally not surfaced.
pub const LOAD_FAILURE_MESSAGE: &str = "There was a problem loading the pizzas! :(";

/// Load progress for one screen instance. There is no retry and no way
/// back to `NotLoaded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    NotLoaded,
    Loaded,
    LoadFailed,
}

/// Controller that performs the one-shot load and forwards UI effects.
///
/// Every effect visible to the display surface travels through the event
/// channel, even though the load runs before the renderer draws anything.
/// The channel's FIFO order stands in for the UI task queue: the single
/// install happens-before every redraw that observes it.
pub struct MenuController {
    state: LoadState,
    tx: Sender<UiEvent>,
}

impl MenuController {
    pub fn new(tx: Sender<UiEvent>) -> Self {
        Self {
            state: LoadState::NotLoaded,
            tx,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Run the load pass. Called exactly once per screen instance.
    ///
    /// On success the full collection is installed in one step; on any
    /// failure the collection is never installed, so the visible state
    /// stays a valid empty list plus the generic alert.
    pub fn on_start(&mut self, menu_path: &Path) {
        debug_assert_eq!(self.state, LoadState::NotLoaded);

        match load_catalog(menu_path) {
            Ok(pizzas) => {
                self.state = LoadState::Loaded;
                let screen = build_menu_screen(&pizzas);
                // Ignore send errors if the renderer has already quit.
                let _ = self.tx.send(UiEvent::Update(Box::new(screen)));
            }
            Err(_) => {
                self.state = LoadState::LoadFailed;
                let _ = self.tx.send(UiEvent::Alert(LOAD_FAILURE_MESSAGE.to_string()));
            }
        }
    }
}

/// Main entry point for the show flow.
pub fn handle(menu_path: &Path, mode: RenderMode) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut controller = MenuController::new(tx);

    match mode {
        RenderMode::Tui => {
            // Renderer event loop on its own thread; the controller loads
            // on the calling thread and hands off through the channel.
            let tui_handle = thread::spawn(move || TuiRenderer::new().run(rx));

            controller.on_start(menu_path);
            drop(controller);

            match tui_handle.join() {
                Ok(result) => result,
                Err(_) => Err(anyhow::anyhow!("TUI thread panicked")),
            }
        }
        RenderMode::Console => {
            controller.on_start(menu_path);
            drop(controller);

            ConsoleRenderer::new().run(rx)
        }
    }
}
