//! Bounded player inventory

use super::{Item, ItemId, ItemKind};

/// Ordered item list that never grows past its capacity
#[derive(Debug, Clone, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Add an item, handing it back if there is no room
    pub fn push(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Item in the given display slot (0-based)
    pub fn slot(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Use up one unit of a stack, dropping the stack when it runs out.
    ///
    /// Returns false if the item is not carried.
    pub fn consume_one(&mut self, id: ItemId) -> bool {
        let Some(idx) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        let item = &mut self.items[idx];
        if item.quantity > 1 {
            item.quantity -= 1;
        } else {
            self.items.remove(idx);
        }
        true
    }

    /// Whether a key with the given key id is carried
    pub fn has_key(&self, key: &str) -> bool {
        self.items.iter().any(|i| i.area_key() == Some(key))
    }

    /// Highest melee damage among carried weapons
    pub fn best_weapon_damage(&self) -> Option<f32> {
        self.items
            .iter()
            .filter(|i| i.kind == ItemKind::Weapon)
            .filter_map(Item::damage)
            .reduce(f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Special;

    fn item(id: u32, kind: ItemKind) -> Item {
        Item::new(ItemId(id), kind, format!("item {id}"))
    }

    fn weapon(id: u32, damage: f32) -> Item {
        item(id, ItemKind::Weapon).with_special(Special {
            damage: Some(damage),
            ..Special::default()
        })
    }

    #[test]
    fn test_push_respects_capacity() {
        let mut inv = Inventory::new(2);
        assert!(inv.push(item(1, ItemKind::Food)).is_ok());
        assert!(inv.push(item(2, ItemKind::Water)).is_ok());
        assert!(inv.is_full());

        let rejected = inv.push(item(3, ItemKind::Tool)).unwrap_err();
        assert_eq!(rejected.id, ItemId(3));
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_consume_one_decrements_stack() {
        let mut inv = Inventory::new(5);
        let mut stack = item(1, ItemKind::Food);
        stack.quantity = 2;
        inv.push(stack).unwrap();

        assert!(inv.consume_one(ItemId(1)));
        assert_eq!(inv.get(ItemId(1)).unwrap().quantity, 1);
        assert!(inv.consume_one(ItemId(1)));
        assert!(inv.get(ItemId(1)).is_none());
        assert!(!inv.consume_one(ItemId(1)));
    }

    #[test]
    fn test_best_weapon_damage() {
        let mut inv = Inventory::new(5);
        assert_eq!(inv.best_weapon_damage(), None);
        inv.push(weapon(1, 15.0)).unwrap();
        inv.push(weapon(2, 30.0)).unwrap();
        inv.push(item(3, ItemKind::Food)).unwrap();
        assert_eq!(inv.best_weapon_damage(), Some(30.0));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut inv = Inventory::new(5);
        for id in 1..=3 {
            inv.push(item(id, ItemKind::Material)).unwrap();
        }
        inv.remove(ItemId(2));
        let ids: Vec<_> = inv.iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(inv.slot(1).map(|i| i.id), Some(ItemId(3)));
    }
}
