//! Round and turn state machine for a two-player session.
//!
//! The controller owns the board, both players and the turn state. Every
//! accepted operation ends by notifying the [`PresentationPort`]. Rejected
//! moves leave all state untouched and are reported as a [`MoveOutcome`]
//! value rather than an error.
//!
//! When a round ends the controller records a [`PendingRestart`]. Whoever
//! drives the controller (see [`GameSession`](crate::GameSession)) calls
//! [`GameController::fire_due_restart`] once the deadline passes.

use super::player::Player;
use super::presentation::PresentationPort;
use super::rules::{self, WinningLine};
use super::types::{Board, Mark, SQUARES};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

/// Pause between the end of a round and the automatic start of the next.
pub const DEFAULT_RESTART_DELAY: Duration = Duration::from_secs(2);

/// Which of the two seats a player occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PlayerSlot {
    /// Player 1, always marks X.
    #[display("Player 1")]
    One,
    /// Player 2, always marks O.
    #[display("Player 2")]
    Two,
}

impl PlayerSlot {
    /// Index of this seat (0 or 1).
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// The other seat.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Mark held by whoever sits here.
    pub fn mark(self) -> Mark {
        match self {
            PlayerSlot::One => Mark::X,
            PlayerSlot::Two => Mark::O,
        }
    }

    fn default_player(self) -> Player {
        Player::new(self.to_string(), self.mark())
    }
}

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    /// Waiting for the current player to place a mark.
    AwaitingMove,
    /// Round decided; a new one starts after the restart delay.
    RoundOver,
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// Index outside 0-8.
    #[display("Square {} does not exist", _0)]
    OutOfRange(usize),
    /// Square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),
    /// The round is over and the next one has not started.
    #[display("Round is over")]
    RoundOver,
}

/// Result of [`GameController::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed; the named mark moves next.
    Continue {
        /// Mark of the player now to move.
        next: Mark,
    },
    /// Mark placed and it completed a line.
    Won(WinningLine),
    /// Mark placed and filled the board without a line.
    Tie,
    /// Nothing changed.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// True unless the move was rejected.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// A scheduled automatic round restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRestart {
    deadline: Instant,
}

impl PendingRestart {
    /// When the next round should start.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Checks whether the deadline has been reached.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}

/// Tic-tac-toe session: board, both players, turns and scores.
#[derive(Debug)]
pub struct GameController<P> {
    board: Board,
    players: [Player; 2],
    current: PlayerSlot,
    phase: RoundPhase,
    last_starter: Option<PlayerSlot>,
    restart_delay: Duration,
    pending_restart: Option<PendingRestart>,
    presenter: P,
}

impl<P: PresentationPort> GameController<P> {
    /// Creates a controller that reports to `presenter`.
    ///
    /// Nothing is shown until [`start_game`](Self::start_game) is called.
    #[instrument(skip(presenter))]
    pub fn new(presenter: P) -> Self {
        Self {
            board: Board::new(),
            players: [PlayerSlot::One.default_player(), PlayerSlot::Two.default_player()],
            current: PlayerSlot::Two,
            phase: RoundPhase::AwaitingMove,
            last_starter: None,
            restart_delay: DEFAULT_RESTART_DELAY,
            pending_restart: None,
            presenter,
        }
    }

    /// Overrides the pause before an automatic restart.
    pub fn with_restart_delay(mut self, delay: Duration) -> Self {
        self.restart_delay = delay;
        self
    }

    /// Starts a new round.
    ///
    /// The first call seats fresh default players. Each call hands the
    /// opening move to the player who did not open the previous round;
    /// Player 2 opens the very first one. Any pending restart is dropped.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        let first_call = self.last_starter.is_none();
        if first_call {
            self.players = [PlayerSlot::One.default_player(), PlayerSlot::Two.default_player()];
        }

        let starter = self.last_starter.map_or(PlayerSlot::Two, PlayerSlot::other);
        self.last_starter = Some(starter);
        self.current = starter;
        self.phase = RoundPhase::AwaitingMove;
        if self.pending_restart.take().is_some() {
            debug!("Replaced pending restart");
        }
        self.board.reset();

        info!(starter = %starter, "Round started");

        if first_call {
            let [one, two] = &self.players;
            self.presenter.update_player_names(one.name(), two.name());
        }
        self.presenter.render_board(self.board.cells());
        self.notify_scores();
        let message = self.turn_message();
        self.presenter.show_message(&message);
    }

    /// Places the current player's mark at `index`.
    ///
    /// Rejected outright while the round is over, for indices outside 0-8,
    /// and for occupied squares.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn make_move(&mut self, index: usize) -> MoveOutcome {
        if self.phase != RoundPhase::AwaitingMove {
            debug!("Move rejected: round over");
            return MoveOutcome::Rejected(MoveRejection::RoundOver);
        }
        if index >= SQUARES {
            debug!("Move rejected: out of range");
            return MoveOutcome::Rejected(MoveRejection::OutOfRange(index));
        }

        let mark = self.current.mark();
        if !self.board.place_mark(index, mark) {
            debug!("Move rejected: occupied");
            return MoveOutcome::Rejected(MoveRejection::Occupied(index));
        }
        debug!(board = %self.board.display(), "Move accepted");

        if let Some(line) = rules::winning_line(&self.board, mark) {
            self.players[self.current.index()].add_point();
            self.phase = RoundPhase::RoundOver;
            info!(winner = %self.current, line = ?line.indices(), "Round won");

            let message = format!("{} wins!", self.current_player().name());
            self.presenter.show_message(&message);
            self.presenter.render_board(self.board.cells());
            self.notify_scores();
            self.presenter.highlight_winning_line(line);
            self.schedule_restart();
            return MoveOutcome::Won(line);
        }

        if rules::is_full(&self.board) {
            self.phase = RoundPhase::RoundOver;
            info!("Round tied");

            self.presenter.show_message("It's a tie!");
            self.presenter.render_board(self.board.cells());
            self.schedule_restart();
            return MoveOutcome::Tie;
        }

        self.current = self.current.other();
        let message = self.turn_message();
        self.presenter.show_message(&message);
        self.presenter.render_board(self.board.cells());
        MoveOutcome::Continue {
            next: self.current.mark(),
        }
    }

    /// Renames the players. Empty names are ignored.
    ///
    /// A renamed player is seated afresh and starts again from a score of 0.
    #[instrument(skip(self))]
    pub fn update_player_names(&mut self, name_one: &str, name_two: &str) {
        for (slot, name) in [(PlayerSlot::One, name_one), (PlayerSlot::Two, name_two)] {
            if name.is_empty() {
                continue;
            }
            let previous = *self.players[slot.index()].score();
            if previous > 0 {
                debug!(slot = %slot, previous, "Rename discards score");
            }
            self.players[slot.index()] = Player::new(name.to_string(), slot.mark());
        }

        let [one, two] = &self.players;
        info!(name_one = %one.name(), name_two = %two.name(), "Players renamed");
        self.presenter.update_player_names(one.name(), two.name());
        self.notify_scores();
    }

    /// Starts the next round if the pending restart is due at `now`.
    ///
    /// Returns `true` when a round was started.
    #[instrument(skip(self))]
    pub fn fire_due_restart(&mut self, now: Instant) -> bool {
        match self.pending_restart {
            Some(pending) if pending.is_due(now) => {
                debug!("Restart due");
                self.start_game();
                true
            }
            _ => false,
        }
    }

    /// Drops the pending restart, leaving the finished round on display.
    ///
    /// Returns `true` if a restart was pending.
    #[instrument(skip(self))]
    pub fn cancel_restart(&mut self) -> bool {
        let cancelled = self.pending_restart.take().is_some();
        if cancelled {
            info!("Pending restart cancelled");
        }
        cancelled
    }

    fn schedule_restart(&mut self) {
        let deadline = Instant::now() + self.restart_delay;
        debug!(delay_ms = self.restart_delay.as_millis() as u64, "Restart scheduled");
        self.pending_restart = Some(PendingRestart { deadline });
    }

    fn notify_scores(&mut self) {
        let [one, two] = &self.players;
        self.presenter.update_score(*one.score(), *two.score());
    }

    fn turn_message(&self) -> String {
        format!("{}'s turn", self.current_player().name())
    }
}

impl<P> GameController<P> {
    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player in the given seat.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Seat of the player to move (or who moved last, once the round is over).
    pub fn current_slot(&self) -> PlayerSlot {
        self.current
    }

    /// Player to move (or who moved last, once the round is over).
    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    /// Phase of the current round.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Seat that opened the current round, if any round has started.
    pub fn round_starter(&self) -> Option<PlayerSlot> {
        self.last_starter
    }

    /// Scheduled automatic restart, if any.
    pub fn pending_restart(&self) -> Option<PendingRestart> {
        self.pending_restart
    }

    /// Pause before an automatic restart.
    pub fn restart_delay(&self) -> Duration {
        self.restart_delay
    }

    /// The presentation port.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presentation port.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
