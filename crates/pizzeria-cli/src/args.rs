use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "pizzeria")]
#[command(about = "Browse the pizzeria's bundled menu in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a menu file, overriding the bundled resource lookup
    #[arg(long)]
    pub menu: Option<String>,

    /// Rendering mode; defaults to the TUI when stdout is a terminal
    #[arg(long, value_enum)]
    pub mode: Option<RenderMode>,
}

/// How the menu screen is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Interactive full-screen list
    Tui,
    /// One line per row, for pipes and scripts
    Console,
}
