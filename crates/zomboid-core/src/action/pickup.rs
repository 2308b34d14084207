//! Looting buildings and dropping items

use super::ensure_playing;
use crate::consts::REACH;
use crate::error::ActionError;
use crate::gameloop::GameState;
use crate::object::ItemId;
use crate::world::Position;

/// Loot the first unlooted building at `pos`, which must be the player's
/// cell or next to it.
///
/// Items go into the inventory in order while there is room; whatever does
/// not fit is left behind and the building counts as looted either way.
pub fn do_collect(state: &mut GameState, pos: Position) -> Result<(), ActionError> {
    ensure_playing(state)?;

    if state.player.position.manhattan(pos) > REACH {
        return Err(ActionError::OutOfReach);
    }
    let idx = state
        .buildings
        .iter()
        .position(|b| b.position == pos && !b.looted)
        .ok_or(ActionError::NothingToLoot)?;
    if state.buildings[idx].items.is_empty() {
        return Err(ActionError::NothingToLoot);
    }
    if state.player.inventory.is_full() {
        return Err(ActionError::InventoryFull);
    }

    let building = &mut state.buildings[idx];
    let kind = building.kind;
    let items = building.take_items();

    let mut names = Vec::new();
    let mut lost = 0;
    for item in items {
        let name = item.name.clone();
        match state.player.inventory.push(item) {
            Ok(()) => names.push(name),
            Err(_) => lost += 1,
        }
    }

    tracing::debug!(%kind, taken = names.len(), lost, "building looted");
    let kind = kind.to_string().to_lowercase();
    state.message(format!("You loot the {kind}: {}.", names.join(", ")));
    if lost > 0 {
        state.message(format!("You had no room for {lost} more item(s)."));
    }
    Ok(())
}

/// Throw an item away to free its slot.
///
/// A key to an area that is still locked cannot be thrown away.
pub fn do_drop(state: &mut GameState, id: ItemId) -> Result<(), ActionError> {
    ensure_playing(state)?;

    let held = state
        .player
        .inventory
        .get(id)
        .ok_or(ActionError::ItemNotFound(id))?;
    if let Some(key) = held.area_key()
        && state.key_opens_locked_area(key)
    {
        return Err(ActionError::KeyStillNeeded(held.name.clone()));
    }

    let item = state
        .player
        .inventory
        .remove(id)
        .ok_or(ActionError::ItemNotFound(id))?;
    tracing::debug!(item = %item.name, "item dropped");
    state.message(format!("You drop the {}.", item.name));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use crate::config::GameConfig;
    use crate::object::{Item, ItemKind};
    use crate::world::loot::make_key;
    use crate::world::{AreaId, Building, BuildingId, BuildingKind};

    fn item(id: u32) -> Item {
        Item::new(ItemId(id), ItemKind::Food, format!("Food {id}"))
    }

    /// A game with a single stocked house next to the player
    fn state_with_house(items: Vec<Item>) -> (GameState, Position) {
        let mut state = GameState::new(GameConfig::default(), GameRng::new(7));
        state.zombies.clear();
        let pos = state.player.position.offset(1, 0);
        let mut house = Building::new(BuildingId(900), pos, BuildingKind::House);
        house.items = items;
        state.buildings = vec![house];
        (state, pos)
    }

    #[test]
    fn test_collect_adjacent() {
        let (mut state, pos) = state_with_house(vec![item(1), item(2)]);
        do_collect(&mut state, pos).unwrap();
        assert_eq!(state.player.inventory.len(), 2);
        assert!(state.buildings[0].looted);
        assert!(state.buildings[0].items.is_empty());
    }

    #[test]
    fn test_collect_only_once() {
        let (mut state, pos) = state_with_house(vec![item(1)]);
        do_collect(&mut state, pos).unwrap();
        assert_eq!(do_collect(&mut state, pos), Err(ActionError::NothingToLoot));
        assert_eq!(state.player.inventory.len(), 1);
    }

    #[test]
    fn test_collect_out_of_reach() {
        let (mut state, _) = state_with_house(vec![item(1)]);
        let far = state.player.position.offset(1, 1);
        assert_eq!(do_collect(&mut state, far), Err(ActionError::OutOfReach));
    }

    #[test]
    fn test_collect_empty_building() {
        let (mut state, pos) = state_with_house(Vec::new());
        assert_eq!(do_collect(&mut state, pos), Err(ActionError::NothingToLoot));
        assert!(!state.buildings[0].looted);
    }

    #[test]
    fn test_collect_full_inventory() {
        let (mut state, pos) = state_with_house(vec![item(1)]);
        for i in 0..10 {
            state.player.inventory.push(item(100 + i)).unwrap();
        }
        assert_eq!(do_collect(&mut state, pos), Err(ActionError::InventoryFull));
        assert!(state.buildings[0].has_loot());
    }

    #[test]
    fn test_collect_overflow_is_lost() {
        let (mut state, pos) = state_with_house(vec![item(1), item(2)]);
        for i in 0..9 {
            state.player.inventory.push(item(100 + i)).unwrap();
        }
        do_collect(&mut state, pos).unwrap();
        assert_eq!(state.player.inventory.len(), 10);
        assert!(state.player.inventory.get(ItemId(1)).is_some());
        assert!(state.player.inventory.get(ItemId(2)).is_none());
        assert!(state.buildings[0].looted);
    }

    #[test]
    fn test_drop() {
        let (mut state, _) = state_with_house(Vec::new());
        state.player.inventory.push(item(5)).unwrap();
        do_drop(&mut state, ItemId(5)).unwrap();
        assert!(state.player.inventory.is_empty());
        assert_eq!(
            do_drop(&mut state, ItemId(5)),
            Err(ActionError::ItemNotFound(ItemId(5)))
        );
    }

    #[test]
    fn test_cannot_drop_needed_key() {
        let (mut state, _) = state_with_house(Vec::new());
        state
            .player
            .inventory
            .push(make_key(ItemId(7), "downtown-key"))
            .unwrap();
        assert!(matches!(
            do_drop(&mut state, ItemId(7)),
            Err(ActionError::KeyStillNeeded(_))
        ));
        assert!(state.player.inventory.has_key("downtown-key"));

        // Once the area is open the key is just clutter
        state.player.unlocked_areas.insert(AreaId::new("downtown"));
        do_drop(&mut state, ItemId(7)).unwrap();
        assert!(!state.player.inventory.has_key("downtown-key"));
    }

    #[test]
    fn test_key_survives_overflow() {
        let mut rng = GameRng::new(7);
        let mut ids = crate::world::EntityIds::new();
        let mut state = GameState::new(GameConfig::default(), GameRng::new(7));
        state.zombies.clear();
        let pos = state.player.position.offset(1, 0);
        let player = state.player.clone();
        let mut contents = crate::world::generation::generate_area(
            0,
            &state.config,
            &player,
            &mut ids,
            &mut rng,
        );
        // Move the key's building next to the player and stock it with loot
        let mut house = contents
            .buildings
            .drain(..)
            .find(|b| b.items.iter().any(|i| i.area_key().is_some()))
            .unwrap();
        house.position = pos;
        house.items.push(item(1));
        house.items.push(item(2));
        state.buildings = vec![house];

        for i in 0..9 {
            state.player.inventory.push(item(100 + i)).unwrap();
        }
        do_collect(&mut state, pos).unwrap();
        assert!(state.player.inventory.has_key("downtown-key"));
        assert!(state.player.inventory.is_full());
    }
}
