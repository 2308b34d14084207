//! Game configuration
//!
//! Every tunable lives here. Values load from a JSON file; missing fields
//! fall back to the defaults, so a config file only needs the keys it changes.

use std::path::{Path, PathBuf};

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_WORLD_SIZE, WORLD_SIZE};
use crate::world::{AreaDef, AreaId, Bounds, default_areas};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Zombie template applied to every zombie created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZombieConfig {
    pub health: f32,
    pub speed: f32,
    pub detection_range: i32,
    /// Health lost by the player per zombie on contact
    pub damage: f32,
}

impl Default for ZombieConfig {
    fn default() -> Self {
        Self {
            health: 50.0,
            speed: 0.5,
            detection_range: 3,
            damage: 10.0,
        }
    }
}

/// User-configurable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // World
    pub world_width: i32,
    pub world_height: i32,
    pub building_count: u32,
    pub areas: Vec<AreaDef>,

    // Player
    pub max_inventory: usize,
    pub move_fatigue_cost: f32,

    // Survival decay per tick
    pub hunger_decay: f32,
    pub thirst_decay: f32,
    pub fatigue_decay: f32,

    // Zombies
    pub zombie: ZombieConfig,
    /// Chance per tick that a new zombie wanders in
    pub spawn_rate: f32,

    // Combat
    pub unarmed_damage: f32,
    pub attack_fatigue_cost: f32,

    // Timing
    pub tick_ms: u64,
    pub hours_per_tick: f32,
    pub start_hour: f32,
    /// Flashlight charge used per tick at night
    pub flashlight_drain: f32,

    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_SIZE,
            world_height: WORLD_SIZE,
            building_count: 8,
            areas: default_areas(),

            max_inventory: 10,
            move_fatigue_cost: 1.0,

            hunger_decay: 0.2,
            thirst_decay: 0.3,
            fatigue_decay: 0.1,

            zombie: ZombieConfig::default(),
            spawn_rate: 0.02,

            unarmed_damage: 5.0,
            attack_fatigue_cost: 2.0,

            tick_ms: 1000,
            hours_per_tick: 0.1,
            start_hour: 8.0,
            flashlight_drain: 0.5,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Load and validate a config file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse and validate a JSON config string
    pub fn parse_config(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// `<config dir>/zomboid/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zomboid").join("config.json"))
    }

    /// Load the explicit path if given, else the default path if it exists,
    /// else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check every field for values the game cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_width <= 0 || self.world_height <= 0 {
            return Err(ConfigError::invalid(
                "world size",
                format!("{}x{} is empty", self.world_width, self.world_height),
            ));
        }
        if self.world_width > MAX_WORLD_SIZE || self.world_height > MAX_WORLD_SIZE {
            return Err(ConfigError::invalid(
                "world size",
                format!(
                    "{}x{} exceeds {MAX_WORLD_SIZE}x{MAX_WORLD_SIZE}",
                    self.world_width, self.world_height
                ),
            ));
        }
        if self.max_inventory == 0 {
            return Err(ConfigError::invalid("max_inventory", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.spawn_rate) {
            return Err(ConfigError::invalid(
                "spawn_rate",
                format!("{} is outside 0..=1", self.spawn_rate),
            ));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::invalid("tick_ms", "must be positive"));
        }
        if self.zombie.speed < 0.0 || self.zombie.detection_range < 0 {
            return Err(ConfigError::invalid("zombie", "speed and range must not be negative"));
        }
        if self.areas.is_empty() {
            return Err(ConfigError::invalid("areas", "at least one area is required"));
        }

        let mut seen = HashSet::new();
        for area in &self.areas {
            if !seen.insert(&area.id) {
                return Err(ConfigError::invalid(
                    "areas",
                    format!("duplicate area id '{}'", area.id),
                ));
            }
            if !(0.0..=1.0).contains(&area.loot_quality) {
                return Err(ConfigError::invalid(
                    "areas",
                    format!("loot_quality of '{}' is outside 0..=1", area.id),
                ));
            }
        }
        if !self.areas.iter().any(|a| a.unlocked) {
            return Err(ConfigError::invalid("areas", "no area is unlocked at start"));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.world_width, self.world_height)
    }

    pub fn area(&self, id: &AreaId) -> Option<&AreaDef> {
        self.areas.iter().find(|a| &a.id == id)
    }

    pub fn area_index(&self, id: &AreaId) -> Option<usize> {
        self.areas.iter().position(|a| &a.id == id)
    }

    /// First area open from the start
    pub fn starting_area(&self) -> Option<&AreaDef> {
        self.areas.iter().find(|a| a.unlocked)
    }
}
