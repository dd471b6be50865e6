//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use strictly_tictactoe::Theme;

/// Strictly Tic-Tac-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Two-player tic-tac-toe with scores and a dark mode", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Show or change the saved theme
    Theme {
        /// What to do with the theme (defaults to `show`)
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
}

/// Theme operations
#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Print the saved theme
    Show,

    /// Save a theme
    Set {
        /// `light` or `dark`
        theme: Theme,
    },

    /// Switch between light and dark
    Toggle,
}
