//! Cursor movement for keyboard navigation.

use crate::game::Position;
use crossterm::event::KeyCode;

/// Moves the cursor one cell in the direction of an arrow key.
///
/// The cursor stays on the board; pressing into an edge is a no-op.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.wrapping_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.wrapping_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
