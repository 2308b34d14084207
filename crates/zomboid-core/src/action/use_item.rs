//! Using carried items: food, drink, medicine, flashlights, batteries, keys

use super::ensure_playing;
use crate::consts::BATTERY_MAX;
use crate::error::ActionError;
use crate::gameloop::GameState;
use crate::object::ItemId;
use crate::world::AreaId;

/// Use one unit of an item.
///
/// Every check runs before anything changes, so a rejected use leaves both
/// the player and the item untouched.
pub fn do_use(state: &mut GameState, id: ItemId) -> Result<(), ActionError> {
    ensure_playing(state)?;

    let item = state
        .player
        .inventory
        .get(id)
        .cloned()
        .ok_or(ActionError::ItemNotFound(id))?;
    if !item.is_usable() {
        return Err(ActionError::NotUsable(item.name));
    }
    let special = item.special.clone().unwrap_or_default();

    if !special.flashlight && special.battery.is_some() && !state.player.has_flashlight {
        return Err(ActionError::NoFlashlight);
    }

    let unlocks: Vec<(AreaId, String)> = match item.area_key() {
        Some(key) => {
            let opened: Vec<_> = state
                .config
                .areas
                .iter()
                .filter(|a| a.required_key.as_deref() == Some(key))
                .filter(|a| !state.player.is_unlocked(&a.id))
                .map(|a| (a.id.clone(), a.name.clone()))
                .collect();
            if opened.is_empty() {
                return Err(ActionError::KeyFitsNothing(item.name.clone()));
            }
            opened
        }
        None => Vec::new(),
    };

    if let Some(effect) = &item.effect {
        state.player.stats.apply(effect);
        state.message(format!("You use the {}. ({})", item.name, effect.describe()));
    }
    if special.flashlight {
        state.player.has_flashlight = true;
        state
            .player
            .set_battery(special.battery.unwrap_or(BATTERY_MAX));
        state.message("You switch on the flashlight.");
    } else if let Some(charge) = special.battery {
        state.player.charge_battery(charge);
        state.message("You put a fresh battery in the flashlight.");
    }
    for (area, name) in unlocks {
        tracing::info!(%area, "area unlocked");
        state.player.unlocked_areas.insert(area);
        state.message(format!("You unlock {name}!"));
    }

    state.player.inventory.consume_one(id);
    tracing::debug!(item = %item.name, "item used");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use crate::config::GameConfig;
    use crate::object::{Effect, Item, ItemKind, Special};
    use crate::player::Stat;
    use crate::world::loot::{BASEBALL_BAT, BATTERY, CANNED_FOOD, CHIPS, FLASHLIGHT, make_key};

    fn state() -> GameState {
        let mut state = GameState::new(GameConfig::default(), GameRng::new(11));
        state.zombies.clear();
        state
    }

    fn give(state: &mut GameState, item: Item) -> ItemId {
        let id = item.id;
        state.player.inventory.push(item).unwrap();
        id
    }

    #[test]
    fn test_food_capped_at_max() {
        let mut state = state();
        state.player.stats.set(Stat::Hunger, 90.0);
        let id = give(&mut state, CANNED_FOOD.instantiate(ItemId(1)));
        do_use(&mut state, id).unwrap();
        assert_eq!(state.player.stats.hunger(), 100.0);
        assert!(state.player.inventory.is_empty());
    }

    #[test]
    fn test_negative_effect_applies() {
        let mut state = state();
        state.player.stats.set(Stat::Hunger, 50.0);
        let id = give(&mut state, CHIPS.instantiate(ItemId(1)));
        do_use(&mut state, id).unwrap();
        assert_eq!(state.player.stats.hunger(), 65.0);
        assert_eq!(state.player.stats.thirst(), 95.0);
    }

    #[test]
    fn test_stack_decrements() {
        let mut state = state();
        let mut food = CANNED_FOOD.instantiate(ItemId(1));
        food.quantity = 2;
        let id = give(&mut state, food);
        do_use(&mut state, id).unwrap();
        assert_eq!(state.player.inventory.get(id).map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_flashlight_then_battery() {
        let mut state = state();
        let battery = give(&mut state, BATTERY.instantiate(ItemId(2)));
        assert_eq!(do_use(&mut state, battery), Err(ActionError::NoFlashlight));
        assert_eq!(state.player.inventory.len(), 1);

        let light = give(&mut state, FLASHLIGHT.instantiate(ItemId(1)));
        do_use(&mut state, light).unwrap();
        assert!(state.player.flashlight_lit());
        assert_eq!(state.player.flashlight_battery, 100.0);

        state.player.set_battery(20.0);
        do_use(&mut state, battery).unwrap();
        assert_eq!(state.player.flashlight_battery, 70.0);
        assert!(state.player.inventory.is_empty());
    }

    #[test]
    fn test_key_unlocks_area() {
        let mut state = state();
        let downtown = AreaId::new("downtown");
        let key = give(&mut state, make_key(ItemId(3), "downtown-key"));
        do_use(&mut state, key).unwrap();
        assert!(state.player.is_unlocked(&downtown));
        assert!(state.player.inventory.get(key).is_none());
    }

    #[test]
    fn test_useless_key_kept() {
        let mut state = state();
        let key = give(&mut state, make_key(ItemId(3), "shed-key"));
        assert_eq!(
            do_use(&mut state, key),
            Err(ActionError::KeyFitsNothing("Shed Key".to_string()))
        );
        assert!(state.player.inventory.get(key).is_some());

        // A second copy of an already used key opens nothing either
        let first = give(&mut state, make_key(ItemId(4), "downtown-key"));
        do_use(&mut state, first).unwrap();
        let second = give(&mut state, make_key(ItemId(5), "downtown-key"));
        assert!(do_use(&mut state, second).is_err());
    }

    #[test]
    fn test_weapon_not_usable() {
        let mut state = state();
        let bat = give(&mut state, BASEBALL_BAT.instantiate(ItemId(1)));
        assert_eq!(
            do_use(&mut state, bat),
            Err(ActionError::NotUsable("Baseball Bat".to_string()))
        );
        assert_eq!(state.player.inventory.len(), 1);
    }

    #[test]
    fn test_missing_item() {
        let mut state = state();
        assert_eq!(
            do_use(&mut state, ItemId(77)),
            Err(ActionError::ItemNotFound(ItemId(77)))
        );
    }

    #[test]
    fn test_custom_effect_and_special() {
        let mut state = state();
        state.player.stats.set(Stat::Health, 10.0);
        let tonic = Item::new(ItemId(8), ItemKind::Medical, "Tonic")
            .with_effect(Effect::new(200.0, 0.0, 0.0, -300.0))
            .with_special(Special::default());
        let id = give(&mut state, tonic);
        do_use(&mut state, id).unwrap();
        assert_eq!(state.player.stats.health(), 100.0);
        assert_eq!(state.player.stats.fatigue(), 0.0);
    }
}
