//! Area population
//!
//! Places zombies and buildings when the player enters an area, rolls each
//! building's loot and hides the key to the next area.

use hashbrown::HashSet;
use strum::IntoEnumIterator;

use super::loot::{make_key, roll_loot};
use super::{Building, BuildingId, BuildingKind, EntityIds};
use crate::config::GameConfig;
use crate::monster::{Zombie, ZombieId};
use crate::object::ItemId;
use crate::player::Player;
use crate::rng::GameRng;

/// Everything placed in a freshly entered area
#[derive(Debug, Clone, Default)]
pub struct AreaContents {
    pub zombies: Vec<Zombie>,
    pub buildings: Vec<Building>,
}

/// Populate the area at `area_index` of the configured table.
///
/// Zombies never start on the player's cell and buildings never share a
/// cell. Returns empty contents for an index outside the table.
pub fn generate_area(
    area_index: usize,
    config: &GameConfig,
    player: &Player,
    ids: &mut EntityIds,
    rng: &mut GameRng,
) -> AreaContents {
    let Some(area) = config.areas.get(area_index) else {
        return AreaContents::default();
    };
    let bounds = config.bounds();

    let mut zombies = Vec::with_capacity(area.zombie_count as usize);
    // A one-cell world has nowhere to put a zombie.
    if bounds.cell_count() > 1 {
        for _ in 0..area.zombie_count {
            let position = loop {
                let pos = rng.random_position(bounds);
                if pos != player.position {
                    break pos;
                }
            };
            zombies.push(Zombie::new(ZombieId(ids.next_id()), position, &config.zombie));
        }
    }

    let kinds: Vec<BuildingKind> = BuildingKind::iter().collect();
    let count = (config.building_count as usize).min(bounds.cell_count());
    let mut taken = HashSet::with_capacity(count);
    let mut buildings = Vec::with_capacity(count);
    while buildings.len() < count {
        let position = rng.random_position(bounds);
        if !taken.insert(position) {
            continue;
        }
        let kind = rng.choose(&kinds).copied().unwrap_or(BuildingKind::House);
        let mut building = Building::new(BuildingId(ids.next_id()), position, kind);
        building.items = roll_loot(kind, area.loot_quality, ids, rng);
        buildings.push(building);
    }

    place_next_key(area_index, config, player, &mut buildings, ids, rng);

    tracing::debug!(
        area = %area.id,
        zombies = zombies.len(),
        buildings = buildings.len(),
        "area populated"
    );

    AreaContents { zombies, buildings }
}

/// Hide the key to the following area in one random building, unless that
/// area is already open or the player already carries its key.
///
/// The key goes first in the building so a partial loot never leaves it
/// behind.
fn place_next_key(
    area_index: usize,
    config: &GameConfig,
    player: &Player,
    buildings: &mut [Building],
    ids: &mut EntityIds,
    rng: &mut GameRng,
) {
    let Some(next) = config.areas.get(area_index + 1) else {
        return;
    };
    let Some(key) = next.required_key.as_deref() else {
        return;
    };
    if player.is_unlocked(&next.id) || player.inventory.has_key(key) || buildings.is_empty() {
        return;
    }

    let idx = rng.rn2(buildings.len() as u32) as usize;
    if let Some(building) = buildings.get_mut(idx) {
        building.items.insert(0, make_key(ItemId(ids.next_id()), key));
        tracing::debug!(key, building = building.id.0, "key placed");
    }
}
