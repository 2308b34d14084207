//! Zombies

pub mod ai;

pub use ai::{ZombieAction, move_zombies, step_toward};

use crate::config::ZombieConfig;
use crate::world::Position;

/// Zombie identifier, unique within a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZombieId(pub u32);

/// A zombie. Its coordinates are fractional: a zombie slower than one cell
/// per tick accumulates progress between cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Zombie {
    pub id: ZombieId,
    pub x: f32,
    pub y: f32,
    pub health: f32,
    /// Cells per tick on each axis
    pub speed: f32,
    /// Manhattan distance at which the zombie starts chasing
    pub detection_range: i32,
    pub chasing: bool,
}

impl Zombie {
    pub fn new(id: ZombieId, position: Position, template: &ZombieConfig) -> Self {
        Self {
            id,
            x: position.x as f32,
            y: position.y as f32,
            health: template.health,
            speed: template.speed,
            detection_range: template.detection_range,
            chasing: false,
        }
    }

    /// Grid cell the zombie occupies
    pub fn cell(&self) -> Position {
        Position::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Manhattan distance from the zombie's exact position to a cell
    pub fn distance_to(&self, target: Position) -> f32 {
        (self.x - target.x as f32).abs() + (self.y - target.y as f32).abs()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount.max(0.0)).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_template() {
        let z = Zombie::new(ZombieId(1), Position::new(3, 4), &ZombieConfig::default());
        assert_eq!(z.cell(), Position::new(3, 4));
        assert_eq!(z.health, 50.0);
        assert_eq!(z.speed, 0.5);
        assert_eq!(z.detection_range, 3);
        assert!(!z.chasing);
    }

    #[test]
    fn test_fractional_cell_floors() {
        let mut z = Zombie::new(ZombieId(1), Position::new(3, 4), &ZombieConfig::default());
        z.x = 3.5;
        z.y = 4.99;
        assert_eq!(z.cell(), Position::new(3, 4));
        assert!((z.distance_to(Position::new(5, 5)) - 1.51).abs() < 1e-4);
    }

    #[test]
    fn test_damage() {
        let mut z = Zombie::new(ZombieId(1), Position::new(0, 0), &ZombieConfig::default());
        z.take_damage(30.0);
        assert!(!z.is_dead());
        z.take_damage(30.0);
        assert!(z.is_dead());
        assert_eq!(z.health, 0.0);
    }
}
