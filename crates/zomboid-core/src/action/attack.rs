//! Melee combat against adjacent zombies

use super::ensure_playing;
use crate::consts::REACH;
use crate::error::ActionError;
use crate::gameloop::GameState;
use crate::player::Stat;

/// Hit the nearest zombie within reach with the best carried weapon, or
/// bare hands when none is carried.
pub fn do_attack(state: &mut GameState) -> Result<(), ActionError> {
    ensure_playing(state)?;

    if state.player.stats.fatigue() <= 0.0 {
        return Err(ActionError::Exhausted);
    }

    let player = state.player.position;
    let idx = state
        .zombies
        .iter()
        .enumerate()
        .filter(|(_, z)| z.cell().manhattan(player) <= REACH)
        .min_by(|(_, a), (_, b)| a.distance_to(player).total_cmp(&b.distance_to(player)))
        .map(|(i, _)| i)
        .ok_or(ActionError::NoTarget)?;

    let damage = state
        .player
        .inventory
        .best_weapon_damage()
        .unwrap_or(state.config.unarmed_damage);
    state
        .player
        .stats
        .adjust(Stat::Fatigue, -state.config.attack_fatigue_cost);

    let zombie = &mut state.zombies[idx];
    zombie.take_damage(damage);
    tracing::debug!(zombie = zombie.id.0, damage, remaining = zombie.health, "attack");

    if zombie.is_dead() {
        state.zombies.swap_remove(idx);
        state.player.kills += 1;
        state.message("You kill the zombie!");
    } else {
        state.message(format!("You hit the zombie for {} damage.", damage.round() as i32));
    }
    Ok(())
}
