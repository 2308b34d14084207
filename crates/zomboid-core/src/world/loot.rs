//! Loot tables per building kind

use super::{BuildingKind, EntityIds, key_label};
use crate::object::{Effect, Item, ItemId, ItemKind, Special};
use crate::rng::GameRng;

/// Non-stat ability of a template
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ability {
    None,
    /// Equips a flashlight with the given charge
    Flashlight(f32),
    /// Recharges a flashlight
    Battery(f32),
    /// Melee damage
    Weapon(f32),
}

/// Blueprint for a lootable item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub kind: ItemKind,
    pub effect: Option<Effect>,
    pub ability: Ability,
}

impl ItemTemplate {
    const fn consumable(name: &'static str, kind: ItemKind, effect: Effect) -> Self {
        Self {
            name,
            kind,
            effect: Some(effect),
            ability: Ability::None,
        }
    }

    const fn special(name: &'static str, kind: ItemKind, ability: Ability) -> Self {
        Self {
            name,
            kind,
            effect: None,
            ability,
        }
    }

    /// Make a concrete item from this template
    pub fn instantiate(&self, id: ItemId) -> Item {
        let mut item = Item::new(id, self.kind, self.name);
        item.effect = self.effect;
        item.special = match self.ability {
            Ability::None => None,
            Ability::Flashlight(charge) => Some(Special {
                flashlight: true,
                battery: Some(charge),
                ..Special::default()
            }),
            Ability::Battery(charge) => Some(Special {
                battery: Some(charge),
                ..Special::default()
            }),
            Ability::Weapon(damage) => Some(Special {
                damage: Some(damage),
                ..Special::default()
            }),
        };
        item
    }
}

pub const CANNED_FOOD: ItemTemplate =
    ItemTemplate::consumable("Canned Food", ItemKind::Food, Effect::new(0.0, 30.0, 0.0, 0.0));
pub const CHIPS: ItemTemplate =
    ItemTemplate::consumable("Chips", ItemKind::Food, Effect::new(0.0, 15.0, -5.0, 0.0));
pub const COFFEE: ItemTemplate =
    ItemTemplate::consumable("Coffee", ItemKind::Food, Effect::new(0.0, 5.0, 5.0, 25.0));
pub const WATER_BOTTLE: ItemTemplate =
    ItemTemplate::consumable("Water Bottle", ItemKind::Water, Effect::new(0.0, 0.0, 40.0, 0.0));
pub const SODA: ItemTemplate =
    ItemTemplate::consumable("Soda", ItemKind::Water, Effect::new(0.0, 0.0, 20.0, 5.0));
pub const BANDAGE: ItemTemplate =
    ItemTemplate::consumable("Bandage", ItemKind::Medical, Effect::new(15.0, 0.0, 0.0, 0.0));
pub const FIRST_AID_KIT: ItemTemplate =
    ItemTemplate::consumable("First Aid Kit", ItemKind::Medical, Effect::new(40.0, 0.0, 0.0, 0.0));
pub const PAINKILLERS: ItemTemplate =
    ItemTemplate::consumable("Painkillers", ItemKind::Medical, Effect::new(10.0, 0.0, 0.0, 10.0));
pub const KITCHEN_KNIFE: ItemTemplate =
    ItemTemplate::special("Kitchen Knife", ItemKind::Weapon, Ability::Weapon(15.0));
pub const BASEBALL_BAT: ItemTemplate =
    ItemTemplate::special("Baseball Bat", ItemKind::Weapon, Ability::Weapon(20.0));
pub const FIRE_AXE: ItemTemplate =
    ItemTemplate::special("Fire Axe", ItemKind::Weapon, Ability::Weapon(30.0));
pub const FLASHLIGHT: ItemTemplate =
    ItemTemplate::special("Flashlight", ItemKind::Tool, Ability::Flashlight(100.0));
pub const BATTERY: ItemTemplate =
    ItemTemplate::special("Battery", ItemKind::Battery, Ability::Battery(50.0));
pub const PLANKS: ItemTemplate = ItemTemplate::special("Planks", ItemKind::Material, Ability::None);
pub const DUCT_TAPE: ItemTemplate =
    ItemTemplate::special("Duct Tape", ItemKind::Material, Ability::None);

const HOUSE_LOOT: &[ItemTemplate] = &[
    CANNED_FOOD,
    CANNED_FOOD,
    WATER_BOTTLE,
    COFFEE,
    BANDAGE,
    KITCHEN_KNIFE,
    FLASHLIGHT,
];

const STORE_LOOT: &[ItemTemplate] = &[
    CANNED_FOOD,
    CHIPS,
    WATER_BOTTLE,
    SODA,
    COFFEE,
    BATTERY,
    FLASHLIGHT,
];

const HOSPITAL_LOOT: &[ItemTemplate] = &[
    BANDAGE,
    BANDAGE,
    FIRST_AID_KIT,
    PAINKILLERS,
    WATER_BOTTLE,
];

const WAREHOUSE_LOOT: &[ItemTemplate] = &[
    PLANKS,
    DUCT_TAPE,
    BASEBALL_BAT,
    FIRE_AXE,
    BATTERY,
    WATER_BOTTLE,
];

/// Items a building of this kind may hold
pub const fn loot_table(kind: BuildingKind) -> &'static [ItemTemplate] {
    match kind {
        BuildingKind::House => HOUSE_LOOT,
        BuildingKind::Store => STORE_LOOT,
        BuildingKind::Hospital => HOSPITAL_LOOT,
        BuildingKind::Warehouse => WAREHOUSE_LOOT,
    }
}

/// Roll the contents of one building.
///
/// With probability `loot_quality` the building holds one item, and a second
/// roll at half that probability adds another.
pub fn roll_loot(
    kind: BuildingKind,
    loot_quality: f32,
    ids: &mut EntityIds,
    rng: &mut GameRng,
) -> Vec<Item> {
    let mut items = Vec::new();
    if !rng.chance(loot_quality) {
        return items;
    }
    let count = if rng.chance(loot_quality * 0.5) { 2 } else { 1 };
    let table = loot_table(kind);
    for _ in 0..count {
        if let Some(template) = rng.choose(table) {
            items.push(template.instantiate(ItemId(ids.next_id())));
        }
    }
    items
}

/// Make the key item for a key id ("hospital-key" -> "Hospital Key")
pub fn make_key(id: ItemId, key: &str) -> Item {
    let name = key_label(key)
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    Item::new(id, ItemKind::Key, name).with_special(Special {
        area_key: Some(key.to_string()),
        ..Special::default()
    })
}
