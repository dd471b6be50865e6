//! Cursor movement for keyboard navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys (and vi-style hjkl).
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Right | KeyCode::Char('l') => cursor.step(0, 1),
        KeyCode::Left | KeyCode::Char('h') => cursor.step(0, -1),
        KeyCode::Down | KeyCode::Char('j') => cursor.step(1, 0),
        KeyCode::Up | KeyCode::Char('k') => cursor.step(-1, 0),
        // No change for other keys
        _ => cursor,
    }
}
