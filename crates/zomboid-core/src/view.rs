//! Read-only projections of the game state for front ends

use strum::IntoEnumIterator;

use crate::consts::{DARK_SIGHT, FLASHLIGHT_SIGHT};
use crate::gameloop::{DeathCause, GameState};
use crate::player::{Stat, StatLevel};
use crate::world::{AreaId, Position, key_label};

/// What to draw in one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Player,
    Zombie { chasing: bool },
    Building { looted: bool },
    Ground,
    /// Outside the player's sight at night
    Dark,
}

/// Manhattan sight radius, or `None` when everything is visible
pub fn visibility_radius(state: &GameState) -> Option<i32> {
    if !state.clock.is_night() {
        None
    } else if state.player.flashlight_lit() {
        Some(FLASHLIGHT_SIGHT)
    } else {
        Some(DARK_SIGHT)
    }
}

/// Player, then zombie, then building, then ground
pub fn cell_view(state: &GameState, pos: Position) -> CellView {
    let player = state.player.position;
    if pos == player {
        return CellView::Player;
    }
    if let Some(radius) = visibility_radius(state)
        && pos.manhattan(player) > radius
    {
        return CellView::Dark;
    }
    if let Some(zombie) = state.zombie_at(pos) {
        return CellView::Zombie {
            chasing: zombie.chasing,
        };
    }
    if let Some(building) = state.building_at(pos) {
        return CellView::Building {
            looted: building.looted,
        };
    }
    CellView::Ground
}

/// One stat for the status panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatRow {
    pub stat: Stat,
    pub value: f32,
    pub level: StatLevel,
}

pub fn stat_rows(state: &GameState) -> Vec<StatRow> {
    let stats = &state.player.stats;
    Stat::iter()
        .map(|stat| StatRow {
            stat,
            value: stats.get(stat),
            level: stats.level(stat),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaStatus {
    Current,
    Available,
    /// Locked; the key that opens it, as words
    Locked { key: Option<String> },
}

/// One line of the area selector
#[derive(Debug, Clone, PartialEq)]
pub struct AreaRow {
    pub id: AreaId,
    pub name: String,
    pub description: String,
    pub zombie_count: u32,
    pub loot_percent: u32,
    pub status: AreaStatus,
}

pub fn area_rows(state: &GameState) -> Vec<AreaRow> {
    state
        .config
        .areas
        .iter()
        .map(|area| {
            let status = if area.id == state.player.current_area {
                AreaStatus::Current
            } else if state.player.is_unlocked(&area.id) {
                AreaStatus::Available
            } else {
                AreaStatus::Locked {
                    key: area.required_key.as_deref().map(key_label),
                }
            };
            AreaRow {
                id: area.id.clone(),
                name: area.name.clone(),
                description: area.description.clone(),
                zombie_count: area.zombie_count,
                loot_percent: area.loot_percent(),
                status,
            }
        })
        .collect()
}

/// Shown when the game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub days_survived: u32,
    pub cause: Option<DeathCause>,
    pub kills: u32,
    pub ticks: u64,
}

pub fn summary(state: &GameState) -> GameSummary {
    GameSummary {
        days_survived: state.clock.day,
        cause: state.death,
        kills: state.player.kills,
        ticks: state.ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use crate::config::GameConfig;
    use crate::monster::{Zombie, ZombieId};
    use crate::world::{Building, BuildingId, BuildingKind};

    fn state() -> GameState {
        let mut state = GameState::new(GameConfig::default(), GameRng::new(4));
        state.zombies.clear();
        state.buildings.clear();
        state
    }

    #[test]
    fn test_cell_priority() {
        let mut state = state();
        let here = state.player.position;
        let next = here.offset(1, 0);
        state.buildings.push(Building::new(BuildingId(1), next, BuildingKind::Store));
        assert_eq!(cell_view(&state, next), CellView::Building { looted: false });

        let config = state.config.zombie.clone();
        state.zombies.push(Zombie::new(ZombieId(2), next, &config));
        state.zombies.push(Zombie::new(ZombieId(3), here, &config));
        assert_eq!(cell_view(&state, next), CellView::Zombie { chasing: false });
        assert_eq!(cell_view(&state, here), CellView::Player);
        assert_eq!(cell_view(&state, Position::new(0, 0)), CellView::Ground);
    }

    #[test]
    fn test_night_visibility() {
        let mut state = state();
        assert_eq!(visibility_radius(&state), None);

        state.clock.hour = 21.0;
        assert_eq!(visibility_radius(&state), Some(2));
        let here = state.player.position;
        assert_eq!(cell_view(&state, here.offset(2, 0)), CellView::Ground);
        assert_eq!(cell_view(&state, here.offset(2, 1)), CellView::Dark);

        state.player.has_flashlight = true;
        state.player.set_battery(50.0);
        assert_eq!(visibility_radius(&state), Some(6));
        assert_eq!(cell_view(&state, here.offset(3, 3)), CellView::Ground);

        state.player.set_battery(0.0);
        assert_eq!(visibility_radius(&state), Some(2));
    }

    #[test]
    fn test_stat_rows_levels() {
        let mut state = state();
        state.player.stats.set(Stat::Thirst, 20.0);
        state.player.stats.set(Stat::Hunger, 50.0);
        let rows = stat_rows(&state);
        assert_eq!(rows.len(), 4);
        let level = |stat| rows.iter().find(|r| r.stat == stat).map(|r| r.level);
        assert_eq!(level(Stat::Thirst), Some(StatLevel::Critical));
        assert_eq!(level(Stat::Hunger), Some(StatLevel::Warning));
        assert_eq!(level(Stat::Health), Some(StatLevel::Ok));
    }

    #[test]
    fn test_area_rows() {
        let state = state();
        let rows = area_rows(&state);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].status, AreaStatus::Current);
        assert_eq!(rows[0].loot_percent, 50);
        assert_eq!(
            rows[1].status,
            AreaStatus::Locked {
                key: Some("downtown key".to_string())
            }
        );
        assert_eq!(rows[3].name, "Military Base");
    }

    #[test]
    fn test_summary() {
        let mut state = state();
        state.player.kills = 3;
        state.ticks = 42;
        state.death = Some(DeathCause::Starvation);
        let s = summary(&state);
        assert_eq!(s.days_survived, 1);
        assert_eq!(s.kills, 3);
        assert_eq!(s.ticks, 42);
        assert_eq!(s.cause.map(|c| c.to_string()), Some("Starved".to_string()));
    }
}
