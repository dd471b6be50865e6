//! Terminal front-end: draws the game and turns keys into session commands.

mod app;
mod input;
mod ui;

pub use app::{Action, App, InputMode};

use crate::config::GameConfig;
use crate::games::tictactoe::{ChannelPresenter, GameController, PresentationEvent};
use crate::session::{GameSession, SessionHandle};
use crate::theme::{FileThemeStore, Theme, ThemeStore};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

/// Runs an interactive game until the user quits.
#[instrument(skip_all)]
pub async fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting terminal front-end");

    let mut store = FileThemeStore::new(config.theme_file().clone());
    let mut app = App::new(initial_theme(&store));

    let (presenter, mut events) = ChannelPresenter::channel();
    let controller = GameController::new(presenter).with_restart_delay(config.restart_delay());
    let (session, handle) = GameSession::new(controller);
    let session_task = tokio::spawn(session.run());
    handle.start_game()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app, &handle, &mut events, &mut store).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    drop(handle);
    session_task.await.context("Game session task failed")?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Saved theme, or the default when none is saved or the store is unreadable.
fn initial_theme(store: &impl ThemeStore) -> Theme {
    match store.load() {
        Ok(saved) => saved.unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable theme file");
            Theme::default()
        }
    }
}

/// Flips the screen theme and saves it. A failed save keeps the new theme.
fn toggle_and_save(app: &mut App, store: &mut impl ThemeStore) -> Theme {
    let theme = app.toggle_theme();
    info!(%theme, "Theme toggled");
    if let Err(e) = store.save(theme) {
        warn!(error = %e, "Failed to save theme");
    }
    theme
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    handle: &SessionHandle,
    events: &mut mpsc::UnboundedReceiver<PresentationEvent>,
    store: &mut impl ThemeStore,
) -> Result<()> {
    loop {
        while let Ok(event) = events.try_recv() {
            app.apply(event);
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            Action::None => {}
            Action::Quit => {
                info!("User quit");
                return Ok(());
            }
            Action::Move(index) => handle.make_move(index)?,
            Action::Restart => handle.start_game()?,
            Action::ToggleTheme => {
                toggle_and_save(app, store);
            }
            Action::Rename { name_one, name_two } => {
                handle.update_player_names(name_one, name_two)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MemoryThemeStore;

    #[test]
    fn test_initial_theme_defaults_when_nothing_saved() {
        let store = MemoryThemeStore::new();
        assert_eq!(initial_theme(&store), Theme::Light);
    }

    #[test]
    fn test_initial_theme_uses_saved_theme() {
        let mut store = MemoryThemeStore::new();
        store.save(Theme::Dark).unwrap();
        assert_eq!(initial_theme(&store), Theme::Dark);
    }

    #[test]
    fn test_initial_theme_ignores_unreadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        std::fs::write(&path, "theme = \"purple\"").unwrap();

        let store = FileThemeStore::new(path);
        assert!(store.load().is_err());
        assert_eq!(initial_theme(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_updates_screen_and_store() {
        let mut store = MemoryThemeStore::new();
        let mut app = App::new(initial_theme(&store));

        assert_eq!(toggle_and_save(&mut app, &mut store), Theme::Dark);
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(store.load().unwrap(), Some(Theme::Dark));

        assert_eq!(toggle_and_save(&mut app, &mut store), Theme::Light);
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(store.load().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn test_toggle_survives_failed_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileThemeStore::new(dir.path().join("missing").join("theme.toml"));
        let mut app = App::new(Theme::Light);

        assert_eq!(toggle_and_save(&mut app, &mut store), Theme::Dark);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_saved_toggle_is_applied_on_next_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");

        let mut store = FileThemeStore::new(&path);
        let mut app = App::new(initial_theme(&store));
        toggle_and_save(&mut app, &mut store);

        let reopened = FileThemeStore::new(&path);
        assert_eq!(initial_theme(&reopened), Theme::Dark);
    }
}
