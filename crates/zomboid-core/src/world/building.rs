//! Lootable buildings

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Position;
use crate::object::Item;

/// Building identifier, unique within a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildingId(pub u32);

/// Building type; selects the loot table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildingKind {
    House,
    Store,
    Hospital,
    Warehouse,
}

/// A building on the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub id: BuildingId,
    pub position: Position,
    pub kind: BuildingKind,
    pub looted: bool,
    pub items: Vec<Item>,
}

impl Building {
    pub fn new(id: BuildingId, position: Position, kind: BuildingKind) -> Self {
        Self {
            id,
            position,
            kind,
            looted: false,
            items: Vec::new(),
        }
    }

    /// Not yet looted and still holding something
    pub fn has_loot(&self) -> bool {
        !self.looted && !self.items.is_empty()
    }

    /// Empty the building. Items are handed out exactly once.
    pub fn take_items(&mut self) -> Vec<Item> {
        self.looted = true;
        core::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{ItemId, ItemKind};

    #[test]
    fn test_take_items_only_once() {
        let mut building = Building::new(BuildingId(1), Position::new(3, 3), BuildingKind::House);
        building
            .items
            .push(Item::new(ItemId(1), ItemKind::Food, "Canned Food"));
        assert!(building.has_loot());

        let first = building.take_items();
        assert_eq!(first.len(), 1);
        assert!(building.looted);
        assert!(building.items.is_empty());
        assert!(!building.has_loot());

        assert!(building.take_items().is_empty());
    }
}
