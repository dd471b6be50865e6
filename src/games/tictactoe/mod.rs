//! Two-player tic-tac-toe with scores carried across rounds.

mod controller;
mod player;
mod position;
mod presentation;
mod rules;
mod types;

pub use controller::{
    DEFAULT_RESTART_DELAY, GameController, MoveOutcome, MoveRejection, PendingRestart, PlayerSlot,
    RoundPhase,
};
pub use player::Player;
pub use position::Position;
pub use presentation::{ChannelPresenter, PresentationEvent, PresentationPort, RecordingPresenter};
pub use rules::{LINES, WinningLine, check_winner, is_full, is_tie, winning_line};
pub use types::{Board, Mark, SQUARES, Square};
