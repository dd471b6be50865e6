//! Cooperative driver that owns a controller and serves commands.
//!
//! A [`GameSession`] runs as one tokio task. It waits on either the next
//! [`SessionCommand`] or the controller's pending restart deadline, so the
//! automatic restart never blocks moves and moves never race the restart.

use crate::games::tictactoe::{GameController, PresentationPort};
use derive_more::{Display, Error};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

/// Request sent to a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Start a new round now.
    StartGame,
    /// Place the current player's mark at the index.
    MakeMove(usize),
    /// Rename the players; empty names are left alone.
    UpdatePlayerNames {
        /// New name for Player 1.
        name_one: String,
        /// New name for Player 2.
        name_two: String,
    },
    /// Drop the pending automatic restart.
    CancelRestart,
}

/// The session task has stopped.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("Game session is closed")]
pub struct SessionClosed;

/// Cloneable sender side of a session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: mpsc::UnboundedSender<SessionCommand>,
}

impl SessionHandle {
    /// Sends a raw command.
    pub fn send(&self, command: SessionCommand) -> Result<(), SessionClosed> {
        self.tx.send(command).map_err(|_| SessionClosed)
    }

    /// Requests a new round.
    pub fn start_game(&self) -> Result<(), SessionClosed> {
        self.send(SessionCommand::StartGame)
    }

    /// Requests a move at `index`.
    pub fn make_move(&self, index: usize) -> Result<(), SessionClosed> {
        self.send(SessionCommand::MakeMove(index))
    }

    /// Requests new player names.
    pub fn update_player_names(
        &self,
        name_one: impl Into<String>,
        name_two: impl Into<String>,
    ) -> Result<(), SessionClosed> {
        self.send(SessionCommand::UpdatePlayerNames {
            name_one: name_one.into(),
            name_two: name_two.into(),
        })
    }

    /// Requests cancellation of the pending restart.
    pub fn cancel_restart(&self) -> Result<(), SessionClosed> {
        self.send(SessionCommand::CancelRestart)
    }
}

/// Owns a [`GameController`] for the lifetime of a game.
#[derive(Debug)]
pub struct GameSession<P> {
    controller: GameController<P>,
    commands: mpsc::UnboundedReceiver<SessionCommand>,
}

impl<P: PresentationPort> GameSession<P> {
    /// Wraps `controller` and returns the handle used to drive it.
    pub fn new(controller: GameController<P>) -> (Self, SessionHandle) {
        let (tx, commands) = mpsc::unbounded_channel();
        (Self { controller, commands }, SessionHandle { tx })
    }

    /// Serves commands until every handle is dropped.
    ///
    /// Returns the controller so callers can inspect the final state.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> GameController<P> {
        info!("Game session running");
        loop {
            let deadline = self.controller.pending_restart().map(|p| p.deadline());
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.apply(command),
                    None => break,
                },
                _ = wait_for(deadline) => {
                    self.controller.fire_due_restart(Instant::now());
                }
            }
        }
        info!("Game session closed");
        self.controller
    }

    fn apply(&mut self, command: SessionCommand) {
        debug!(?command, "Applying command");
        match command {
            SessionCommand::StartGame => self.controller.start_game(),
            SessionCommand::MakeMove(index) => {
                let outcome = self.controller.make_move(index);
                debug!(?outcome, "Move handled");
            }
            SessionCommand::UpdatePlayerNames { name_one, name_two } => {
                self.controller.update_player_names(&name_one, &name_two);
            }
            SessionCommand::CancelRestart => {
                self.controller.cancel_restart();
            }
        }
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
