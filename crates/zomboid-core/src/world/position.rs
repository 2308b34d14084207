//! Grid coordinates and world bounds

use serde::{Deserialize, Serialize};

/// A cell on the world grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell
    pub const fn manhattan(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Size of the playable grid; valid cells are `0..width` x `0..height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Pull a cell back inside the grid
    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(
            pos.x.clamp(0, (self.width - 1).max(0)),
            pos.y.clamp(0, (self.height - 1).max(0)),
        )
    }

    /// Pull a fractional coordinate pair back inside the grid
    pub fn clamp_f32(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(0.0, (self.width - 1).max(0) as f32),
            y.clamp(0.0, (self.height - 1).max(0) as f32),
        )
    }

    /// The cell the player spawns on
    pub const fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        let a = Position::new(2, 3);
        let b = Position::new(5, 1);
        assert_eq!(a.manhattan(b), 5);
        assert_eq!(b.manhattan(a), 5);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn test_clamp() {
        let bounds = Bounds::new(20, 20);
        assert_eq!(bounds.clamp(Position::new(-1, 5)), Position::new(0, 5));
        assert_eq!(bounds.clamp(Position::new(20, 25)), Position::new(19, 19));
        assert_eq!(bounds.clamp(Position::new(4, 4)), Position::new(4, 4));
    }

    #[test]
    fn test_center_matches_default_spawn() {
        assert_eq!(Bounds::new(20, 20).center(), Position::new(10, 10));
    }
}
