//! The player character

mod stats;

pub use stats::{Stat, StatLevel, Stats, clamp_stat};

use hashbrown::HashSet;

use crate::consts::BATTERY_MAX;
use crate::object::Inventory;
use crate::world::{AreaId, Position};

/// Player state
#[derive(Debug, Clone)]
pub struct Player {
    pub position: Position,
    pub stats: Stats,
    pub inventory: Inventory,
    pub has_flashlight: bool,
    /// Flashlight charge in [0, 100]
    pub flashlight_battery: f32,
    pub current_area: AreaId,
    pub unlocked_areas: HashSet<AreaId>,
    /// Zombies killed this game
    pub kills: u32,
}

impl Player {
    pub fn new(
        position: Position,
        max_inventory: usize,
        current_area: AreaId,
        unlocked_areas: HashSet<AreaId>,
    ) -> Self {
        Self {
            position,
            stats: Stats::default(),
            inventory: Inventory::new(max_inventory),
            has_flashlight: false,
            flashlight_battery: 0.0,
            current_area,
            unlocked_areas,
            kills: 0,
        }
    }

    pub fn is_unlocked(&self, area: &AreaId) -> bool {
        self.unlocked_areas.contains(area)
    }

    /// Flashlight equipped and charged
    pub fn flashlight_lit(&self) -> bool {
        self.has_flashlight && self.flashlight_battery > 0.0
    }

    pub fn set_battery(&mut self, charge: f32) {
        self.flashlight_battery = charge.clamp(0.0, BATTERY_MAX);
    }

    pub fn drain_battery(&mut self, amount: f32) {
        self.set_battery(self.flashlight_battery - amount);
    }

    pub fn charge_battery(&mut self, amount: f32) {
        self.set_battery(self.flashlight_battery + amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        let start = AreaId::new("suburbs");
        let unlocked = HashSet::from_iter([start.clone()]);
        Player::new(Position::new(10, 10), 10, start, unlocked)
    }

    #[test]
    fn test_new_player() {
        let p = player();
        assert_eq!(p.position, Position::new(10, 10));
        assert_eq!(p.inventory.capacity(), 10);
        assert!(p.is_unlocked(&AreaId::new("suburbs")));
        assert!(!p.is_unlocked(&AreaId::new("downtown")));
        assert!(!p.flashlight_lit());
    }

    #[test]
    fn test_battery_clamped() {
        let mut p = player();
        p.has_flashlight = true;
        p.charge_battery(150.0);
        assert_eq!(p.flashlight_battery, 100.0);
        p.drain_battery(250.0);
        assert_eq!(p.flashlight_battery, 0.0);
        assert!(!p.flashlight_lit());
    }
}
