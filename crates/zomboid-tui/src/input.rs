//! Input handling - convert key events to commands

use crossterm::event::{KeyCode, KeyEvent};
use zomboid_core::action::{Command, Direction};

/// Convert a key event to a game command.
///
/// These are the bindings that map directly to a Command without needing
/// additional input. Item and area selection are handled in app.rs.
pub fn key_to_command(key: KeyEvent) -> Option<Command> {
    match key.code {
        // WASD
        KeyCode::Char('w' | 'W') => Some(Command::Move(Direction::Up)),
        KeyCode::Char('a' | 'A') => Some(Command::Move(Direction::Left)),
        KeyCode::Char('s' | 'S') => Some(Command::Move(Direction::Down)),
        KeyCode::Char('d' | 'D') => Some(Command::Move(Direction::Right)),

        // Arrow keys
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),

        KeyCode::Char('e' | 'E') => Some(Command::CollectHere), // e : loot here
        KeyCode::Char('f' | ' ') => Some(Command::Attack),       // f : fight

        _ => None,
    }
}

/// Inventory slot for a number key: '1'..'9' are slots 0..8, '0' is slot 9
pub fn slot_for_key(key: KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char('0') => Some(9),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}
