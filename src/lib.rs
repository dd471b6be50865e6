//! Strictly Tic-Tac-Toe library - two players, running scores, one board.
//!
//! # Architecture
//!
//! - **Games**: board, players, win/tie rules and the round controller
//! - **Session**: tokio task that owns a controller and fires auto-restarts
//! - **Theme**: light/dark preference and its persistence
//! - **TUI**: terminal front-end implementing the presentation port
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameController, MoveOutcome, RecordingPresenter};
//!
//! let mut game = GameController::new(RecordingPresenter::new());
//! game.start_game();
//! assert!(matches!(game.make_move(4), MoveOutcome::Continue { .. }));
//! assert_eq!(game.presenter().last_message(), Some("Player 1's turn"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;
mod theme;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, ChannelPresenter, DEFAULT_RESTART_DELAY, GameController, LINES, Mark, MoveOutcome,
    MoveRejection, PendingRestart, Player, PlayerSlot, Position, PresentationEvent,
    PresentationPort, RecordingPresenter, RoundPhase, SQUARES, Square, WinningLine, check_winner,
    is_full, is_tie, winning_line,
};

// Crate-level exports - Session management
pub use session::{GameSession, SessionClosed, SessionCommand, SessionHandle};

// Crate-level exports - Theme persistence
pub use theme::{
    FileThemeStore, MemoryThemeStore, Theme, ThemeError, ThemeStore, toggle_saved_theme,
};

// Crate-level exports - Terminal front-end
pub use tui::{Action, App, InputMode, run_tui};
