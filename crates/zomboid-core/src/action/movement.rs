//! Walking the grid

use super::{Direction, ensure_playing};
use crate::error::ActionError;
use crate::gameloop::GameState;
use crate::player::Stat;

/// Step one cell, clamped to the world edge. Costs fatigue even when the
/// edge stops the step. Zombie and building cells can be entered.
pub fn do_move(state: &mut GameState, direction: Direction) -> Result<(), ActionError> {
    ensure_playing(state)?;

    let (dx, dy) = direction.delta();
    let target = state.player.position.offset(dx, dy);
    state.player.position = state.config.bounds().clamp(target);
    state
        .player
        .stats
        .adjust(Stat::Fatigue, -state.config.move_fatigue_cost);
    Ok(())
}
