mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod resource;
pub mod ui;

pub use args::{Cli, RenderMode};
pub use commands::run;
pub use handlers::show::{LOAD_FAILURE_MESSAGE, LoadState, MenuController};
