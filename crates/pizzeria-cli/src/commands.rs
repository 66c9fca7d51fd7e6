use anyhow::Result;
use is_terminal::IsTerminal;

use crate::args::{Cli, RenderMode};
use crate::handlers;
use crate::resource::resolve_menu_path;

pub fn run(cli: Cli) -> Result<()> {
    let menu_path = resolve_menu_path(cli.menu.as_deref());

    let mode = cli.mode.unwrap_or_else(|| {
        if std::io::stdout().is_terminal() {
            RenderMode::Tui
        } else {
            RenderMode::Console
        }
    });

    handlers::show::handle(&menu_path, mode)
}
