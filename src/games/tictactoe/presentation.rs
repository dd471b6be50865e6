//! Outbound port through which the controller reports what to show.

use super::rules::WinningLine;
use super::types::{SQUARES, Square};
use tokio::sync::mpsc;
use tracing::warn;

/// Display surface driven by the game controller.
///
/// Calls are notifications; the controller never reads anything back.
pub trait PresentationPort {
    /// Draws the nine squares.
    fn render_board(&mut self, cells: &[Square; SQUARES]);

    /// Replaces the status line.
    fn show_message(&mut self, text: &str);

    /// Shows both running scores.
    fn update_score(&mut self, score_one: u32, score_two: u32);

    /// Shows both player names.
    fn update_player_names(&mut self, name_one: &str, name_two: &str);

    /// Marks the line that ended the round.
    fn highlight_winning_line(&mut self, _line: WinningLine) {}
}

/// One notification sent to a [`PresentationPort`], as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationEvent {
    /// Board contents changed.
    Board([Square; SQUARES]),
    /// New status message.
    Message(String),
    /// New scores.
    Score(u32, u32),
    /// New player names.
    PlayerNames(String, String),
    /// A round was won along this line.
    WinningLine(WinningLine),
}

/// Port that keeps every notification in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    events: Vec<PresentationEvent>,
}

impl RecordingPresenter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, oldest first.
    pub fn events(&self) -> &[PresentationEvent] {
        &self.events
    }

    /// Most recent status message.
    pub fn last_message(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            PresentationEvent::Message(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Drops all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PresentationPort for RecordingPresenter {
    fn render_board(&mut self, cells: &[Square; SQUARES]) {
        self.events.push(PresentationEvent::Board(*cells));
    }

    fn show_message(&mut self, text: &str) {
        self.events.push(PresentationEvent::Message(text.to_string()));
    }

    fn update_score(&mut self, score_one: u32, score_two: u32) {
        self.events.push(PresentationEvent::Score(score_one, score_two));
    }

    fn update_player_names(&mut self, name_one: &str, name_two: &str) {
        self.events.push(PresentationEvent::PlayerNames(
            name_one.to_string(),
            name_two.to_string(),
        ));
    }

    fn highlight_winning_line(&mut self, line: WinningLine) {
        self.events.push(PresentationEvent::WinningLine(line));
    }
}

/// Port that forwards notifications to a render loop over a channel.
#[derive(Debug, Clone)]
pub struct ChannelPresenter {
    tx: mpsc::UnboundedSender<PresentationEvent>,
}

impl ChannelPresenter {
    /// Creates a presenter and the receiver its events arrive on.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PresentationEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: PresentationEvent) {
        if self.tx.send(event).is_err() {
            warn!("Presentation receiver dropped, discarding update");
        }
    }
}

impl PresentationPort for ChannelPresenter {
    fn render_board(&mut self, cells: &[Square; SQUARES]) {
        self.send(PresentationEvent::Board(*cells));
    }

    fn show_message(&mut self, text: &str) {
        self.send(PresentationEvent::Message(text.to_string()));
    }

    fn update_score(&mut self, score_one: u32, score_two: u32) {
        self.send(PresentationEvent::Score(score_one, score_two));
    }

    fn update_player_names(&mut self, name_one: &str, name_two: &str) {
        self.send(PresentationEvent::PlayerNames(
            name_one.to_string(),
            name_two.to_string(),
        ));
    }

    fn highlight_winning_line(&mut self, line: WinningLine) {
        self.send(PresentationEvent::WinningLine(line));
    }
}
