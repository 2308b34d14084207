//! World structures: grid positions, areas, buildings, loot and the clock

pub mod area;
pub mod building;
pub mod generation;
pub mod loot;
pub mod position;
pub mod time;

pub use area::{AreaDef, AreaId, default_areas, key_label};
pub use building::{Building, BuildingId, BuildingKind};
pub use generation::{AreaContents, generate_area};
pub use position::{Bounds, Position};
pub use time::GameClock;

/// Monotonic id source shared by every entity created during a game
#[derive(Debug, Clone, Default)]
pub struct EntityIds {
    next: u32,
}

impl EntityIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused id
    pub fn next_id(&mut self) -> u32 {
        self.next += 1;
        self.next
    }
}
