//! Application state and key handling for the terminal front-end.

use crate::games::tictactoe::{
    PlayerSlot, Position, PresentationEvent, SQUARES, Square, WinningLine,
};
use crate::theme::Theme;
use crossterm::event::KeyCode;
use tracing::debug;

/// What the render loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing beyond redrawing.
    None,
    /// Leave the program.
    Quit,
    /// Place a mark at the index.
    Move(usize),
    /// Start a new round.
    Restart,
    /// Switch and save the theme.
    ToggleTheme,
    /// Apply edited names (empty means unchanged).
    Rename {
        /// Name for Player 1.
        name_one: String,
        /// Name for Player 2.
        name_two: String,
    },
}

/// Whether keys drive the board or the name prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Keys move the cursor and place marks.
    Playing,
    /// Keys type into the name prompt for `slot`.
    EditingName {
        /// Seat whose name is being typed.
        slot: PlayerSlot,
        /// Text typed so far.
        buffer: String,
        /// Player 1's name once confirmed.
        name_one: Option<String>,
    },
}

/// Everything the screen shows, rebuilt from presentation events.
#[derive(Debug, Clone)]
pub struct App {
    cells: [Square; SQUARES],
    message: String,
    scores: (u32, u32),
    names: (String, String),
    highlight: Option<WinningLine>,
    cursor: Position,
    theme: Theme,
    mode: InputMode,
}

impl App {
    /// Creates the screen state with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            cells: [Square::Empty; SQUARES],
            message: String::new(),
            scores: (0, 0),
            names: (PlayerSlot::One.to_string(), PlayerSlot::Two.to_string()),
            highlight: None,
            cursor: Position::default(),
            theme,
            mode: InputMode::Playing,
        }
    }

    /// Board squares as last rendered.
    pub fn cells(&self) -> &[Square; SQUARES] {
        &self.cells
    }

    /// Status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Scores of Player 1 and Player 2.
    pub fn scores(&self) -> (u32, u32) {
        self.scores
    }

    /// Names of Player 1 and Player 2.
    pub fn names(&self) -> (&str, &str) {
        (&self.names.0, &self.names.1)
    }

    /// Line to highlight, if the round was won.
    pub fn highlight(&self) -> Option<WinningLine> {
        self.highlight
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switches to the other theme and returns it.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    /// Current input mode.
    pub fn mode(&self) -> &InputMode {
        &self.mode
    }

    /// Folds one presentation event into the screen state.
    pub fn apply(&mut self, event: PresentationEvent) {
        debug!(?event, "Handling presentation event");
        match event {
            PresentationEvent::Board(cells) => {
                if cells.iter().all(|s| *s == Square::Empty) {
                    self.highlight = None;
                }
                self.cells = cells;
            }
            PresentationEvent::Message(text) => self.message = text,
            PresentationEvent::Score(one, two) => self.scores = (one, two),
            PresentationEvent::PlayerNames(one, two) => self.names = (one, two),
            PresentationEvent::WinningLine(line) => self.highlight = Some(line),
        }
    }

    /// Interprets a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match std::mem::replace(&mut self.mode, InputMode::Playing) {
            InputMode::Playing => self.handle_play_key(key),
            InputMode::EditingName {
                slot,
                buffer,
                name_one,
            } => self.handle_name_key(key, slot, buffer, name_one),
        }
    }

    fn handle_play_key(&mut self, key: KeyCode) -> Action {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') => Action::Restart,
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('n') => {
                self.mode = InputMode::EditingName {
                    slot: PlayerSlot::One,
                    buffer: String::new(),
                    name_one: None,
                };
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::Move(self.cursor.to_index()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                match Position::from_digit_or_label(&c.to_string()) {
                    Some(position) => {
                        self.cursor = position;
                        Action::Move(position.to_index())
                    }
                    None => Action::None,
                }
            }
            other => {
                self.cursor = super::input::move_cursor(self.cursor, other);
                Action::None
            }
        }
    }

    fn handle_name_key(
        &mut self,
        key: KeyCode,
        slot: PlayerSlot,
        mut buffer: String,
        name_one: Option<String>,
    ) -> Action {
        match key {
            KeyCode::Esc => Action::None,
            KeyCode::Enter => match slot {
                PlayerSlot::One => {
                    self.mode = InputMode::EditingName {
                        slot: PlayerSlot::Two,
                        buffer: String::new(),
                        name_one: Some(buffer.trim().to_string()),
                    };
                    Action::None
                }
                PlayerSlot::Two => Action::Rename {
                    name_one: name_one.unwrap_or_default(),
                    name_two: buffer.trim().to_string(),
                },
            },
            other => {
                match other {
                    KeyCode::Char(c) => buffer.push(c),
                    KeyCode::Backspace => {
                        buffer.pop();
                    }
                    _ => {}
                }
                self.mode = InputMode::EditingName {
                    slot,
                    buffer,
                    name_one,
                };
                Action::None
            }
        }
    }
}
