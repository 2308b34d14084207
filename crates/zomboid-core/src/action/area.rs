//! Travelling between areas

use super::ensure_playing;
use crate::error::ActionError;
use crate::gameloop::GameState;
use crate::world::AreaId;

/// Travel to another unlocked area.
///
/// The old area's zombies and buildings are dropped, the player arrives in
/// the middle of the map with stats and inventory intact, and the new area
/// is populated from scratch.
pub fn do_switch_area(state: &mut GameState, target: &AreaId) -> Result<(), ActionError> {
    ensure_playing(state)?;

    let idx = state
        .config
        .area_index(target)
        .ok_or_else(|| ActionError::UnknownArea(target.clone()))?;
    let area = &state.config.areas[idx];
    if &state.player.current_area == target {
        return Err(ActionError::AlreadyThere(area.name.clone()));
    }
    if !state.player.is_unlocked(target) {
        return Err(ActionError::AreaLocked(area.name.clone()));
    }
    let arrival = format!("You travel to {}. {}", area.name, area.description);

    state.player.current_area = target.clone();
    state.player.position = state.config.bounds().center();
    state.populate_area(idx);
    state.message(arrival.trim_end().to_string());
    tracing::info!(area = %target, "area switched");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use crate::config::GameConfig;
    use crate::object::ItemId;
    use crate::player::Stat;
    use crate::world::Position;
    use crate::world::loot::CANNED_FOOD;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), GameRng::new(21))
    }

    #[test]
    fn test_switch_to_unlocked_area() {
        let mut state = state();
        let downtown = AreaId::new("downtown");
        state.player.unlocked_areas.insert(downtown.clone());
        state.player.position = Position::new(2, 3);
        state.player.stats.set(Stat::Hunger, 40.0);
        state
            .player
            .inventory
            .push(CANNED_FOOD.instantiate(ItemId(500)))
            .unwrap();

        do_switch_area(&mut state, &downtown).unwrap();
        assert_eq!(state.player.current_area, downtown);
        assert_eq!(state.player.position, Position::new(10, 10));
        assert_eq!(state.player.stats.hunger(), 40.0);
        assert_eq!(state.player.inventory.len(), 1);
        assert_eq!(state.zombies.len(), 8);
        assert_eq!(state.buildings.len(), 8);
        assert!(state.zombies.iter().all(|z| z.cell() != state.player.position));
    }

    #[test]
    fn test_locked_area_rejected() {
        let mut state = state();
        let before = state.buildings.clone();
        assert_eq!(
            do_switch_area(&mut state, &AreaId::new("hospital")),
            Err(ActionError::AreaLocked("Hospital".to_string()))
        );
        assert_eq!(state.buildings, before);
    }

    #[test]
    fn test_unknown_and_current() {
        let mut state = state();
        assert_eq!(
            do_switch_area(&mut state, &AreaId::new("moon")),
            Err(ActionError::UnknownArea(AreaId::new("moon")))
        );
        assert_eq!(
            do_switch_area(&mut state, &AreaId::new("suburbs")),
            Err(ActionError::AlreadyThere("Suburbs".to_string()))
        );
    }

    #[test]
    fn test_return_repopulates() {
        let mut state = state();
        let suburbs = AreaId::new("suburbs");
        let downtown = AreaId::new("downtown");
        state.player.unlocked_areas.insert(downtown.clone());
        for b in &mut state.buildings {
            b.take_items();
        }
        do_switch_area(&mut state, &downtown).unwrap();
        do_switch_area(&mut state, &suburbs).unwrap();
        assert!(state.buildings.iter().all(|b| !b.looted));
        assert_eq!(state.zombies.len(), 5);
    }
}
