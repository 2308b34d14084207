//! Items and the player's inventory

pub mod inventory;

pub use inventory::Inventory;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::player::Stat;

/// Item identifier, unique within a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// Item type tag
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Food,
    Water,
    Weapon,
    Medical,
    Material,
    Tool,
    Battery,
    Key,
}

/// Stat deltas applied when an item is consumed
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Effect {
    pub health: f32,
    pub hunger: f32,
    pub thirst: f32,
    pub fatigue: f32,
}

impl Effect {
    pub const fn new(health: f32, hunger: f32, thirst: f32, fatigue: f32) -> Self {
        Self {
            health,
            hunger,
            thirst,
            fatigue,
        }
    }

    /// Delta for a single stat
    pub const fn delta(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Health => self.health,
            Stat::Hunger => self.hunger,
            Stat::Thirst => self.thirst,
            Stat::Fatigue => self.fatigue,
        }
    }

    /// Short summary like "+30 Food -5 Water"
    pub fn describe(&self) -> String {
        let parts = [
            (self.health, "HP"),
            (self.hunger, "Food"),
            (self.thirst, "Water"),
            (self.fatigue, "Energy"),
        ];
        parts
            .iter()
            .filter(|(value, _)| *value != 0.0)
            .map(|(value, label)| format!("{:+} {}", value.round() as i32, label))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Special abilities carried by tools, batteries, keys and weapons
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Special {
    /// Using the item equips a flashlight
    pub flashlight: bool,
    /// Battery charge granted (or carried, for a flashlight)
    pub battery: Option<f32>,
    /// Key id opened by this item
    pub area_key: Option<String>,
    /// Melee damage when carried
    pub damage: Option<f32>,
}

/// A single item (stack)
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub name: String,
    pub quantity: u32,
    pub effect: Option<Effect>,
    pub special: Option<Special>,
}

impl Item {
    pub fn new(id: ItemId, kind: ItemKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            quantity: 1,
            effect: None,
            special: None,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn with_special(mut self, special: Special) -> Self {
        self.special = Some(special);
        self
    }

    /// Key id if this item is an area key
    pub fn area_key(&self) -> Option<&str> {
        self.special.as_ref().and_then(|s| s.area_key.as_deref())
    }

    /// Melee damage if this item is a weapon
    pub fn damage(&self) -> Option<f32> {
        self.special.as_ref().and_then(|s| s.damage)
    }

    /// Whether "use" does anything with this item
    pub fn is_usable(&self) -> bool {
        if self.effect.is_some() {
            return true;
        }
        match &self.special {
            Some(s) => s.flashlight || s.battery.is_some() || s.area_key.is_some(),
            None => false,
        }
    }

    /// One-line description of what the item does
    pub fn describe(&self) -> String {
        if let Some(effect) = &self.effect {
            return effect.describe();
        }
        match &self.special {
            Some(s) if s.flashlight => "Flashlight".to_string(),
            Some(Special {
                battery: Some(charge),
                ..
            }) => format!("+{} Battery", charge.round() as i32),
            Some(Special {
                area_key: Some(key),
                ..
            }) => format!("Opens {}", crate::world::key_label(key)),
            Some(Special {
                damage: Some(damage),
                ..
            }) => format!("{} DMG", damage.round() as i32),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_describe() {
        let effect = Effect::new(0.0, 30.0, -5.0, 0.0);
        assert_eq!(effect.describe(), "+30 Food -5 Water");
        assert_eq!(Effect::default().describe(), "");
    }

    #[test]
    fn test_usability() {
        let food = Item::new(ItemId(1), ItemKind::Food, "Canned Food")
            .with_effect(Effect::new(0.0, 30.0, 0.0, 0.0));
        assert!(food.is_usable());

        let planks = Item::new(ItemId(2), ItemKind::Material, "Planks");
        assert!(!planks.is_usable());

        let bat = Item::new(ItemId(3), ItemKind::Weapon, "Baseball Bat").with_special(Special {
            damage: Some(20.0),
            ..Special::default()
        });
        assert!(!bat.is_usable());
        assert_eq!(bat.damage(), Some(20.0));

        let key = Item::new(ItemId(4), ItemKind::Key, "Downtown Key").with_special(Special {
            area_key: Some("downtown-key".to_string()),
            ..Special::default()
        });
        assert!(key.is_usable());
        assert_eq!(key.area_key(), Some("downtown-key"));
        assert_eq!(key.describe(), "Opens downtown key");
    }
}
