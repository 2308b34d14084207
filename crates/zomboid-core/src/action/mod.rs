//! Player action system
//!
//! Each action is a function over [`GameState`] returning
//! `Result<(), ActionError>`; [`crate::GameLoop::execute`] dispatches
//! [`Command`]s to them.

pub mod area;
pub mod attack;
pub mod movement;
pub mod pickup;
pub mod use_item;

use strum::{Display, EnumIter};

use crate::error::ActionError;
use crate::gameloop::GameState;
use crate::object::ItemId;
use crate::world::{AreaId, Position};

/// Player command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// Loot a building at or next to the player
    Collect(Position),
    /// Loot the building on the player's own cell
    CollectHere,
    UseItem(ItemId),
    DropItem(ItemId),
    Attack,
    SwitchArea(AreaId),
    Restart,
}

/// Movement directions on the grid; y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Get the delta (dx, dy) for this direction
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Reject any action once the player is dead
pub(crate) fn ensure_playing(state: &GameState) -> Result<(), ActionError> {
    if state.game_over {
        Err(ActionError::GameOver)
    } else {
        Ok(())
    }
}
