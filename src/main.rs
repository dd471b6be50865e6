//! Strictly Tic-Tac-Toe - terminal game and theme management.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, ThemeAction};
use std::path::Path;
use strictly_tictactoe::{FileThemeStore, GameConfig, ThemeStore, run_tui, toggle_saved_theme};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(config.log_file())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config).await,
        Command::Theme { action } => run_theme(&config, action.unwrap_or(ThemeAction::Show)),
    }
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Handles the `theme` subcommand.
fn run_theme(config: &GameConfig, action: ThemeAction) -> Result<()> {
    let mut store = FileThemeStore::new(config.theme_file().clone());
    let theme = match action {
        ThemeAction::Show => store.load()?.unwrap_or_default(),
        ThemeAction::Set { theme } => {
            store.save(theme)?;
            theme
        }
        ThemeAction::Toggle => toggle_saved_theme(&mut store)?,
    };
    info!(%theme, path = %store.path().display(), "Theme command finished");
    println!("{}", theme);
    Ok(())
}
