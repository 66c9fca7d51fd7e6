//! Renderers drain UI events and draw the menu screen.

pub mod console;
pub mod tui;

pub use console::ConsoleRenderer;
pub use tui::TuiRenderer;

use super::view_models::MenuScreenViewModel;

/// UI effects sent from the controller to a renderer.
///
/// The channel's FIFO order stands in for the host UI task queue: the
/// collection install and the alert are observed in the order they were
/// enqueued, regardless of which thread enqueued them.
pub enum UiEvent {
    /// Replace the current screen wholesale.
    Update(Box<MenuScreenViewModel>),
    /// Arm the modal alert.
    Alert(String),
}
