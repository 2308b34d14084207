//! Main game loop
//!
//! The world advances on a fixed timer through [`GameLoop::tick`]; player
//! commands arrive between ticks through [`GameLoop::execute`].

use std::collections::VecDeque;

use hashbrown::HashSet;
use strum::Display;

use crate::action::{self, Command};
use crate::config::GameConfig;
use crate::consts::MAX_MESSAGES;
use crate::error::ActionError;
use crate::monster::{Zombie, ZombieId, move_zombies};
use crate::player::{Player, Stat};
use crate::rng::GameRng;
use crate::world::{AreaDef, AreaId, Building, EntityIds, GameClock, Position, generate_area};

/// Why the player died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DeathCause {
    #[strum(to_string = "Starved")]
    Starvation,
    #[strum(to_string = "Died of thirst")]
    Dehydration,
    #[strum(to_string = "Succumbed to wounds")]
    Wounds,
    #[strum(to_string = "Eaten by zombies")]
    Zombies,
}

/// Result of a tick or a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Keep playing
    Continue,
    /// The player died during this step
    PlayerDied(DeathCause),
    /// The game had already ended; nothing happened
    GameOver,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub rng: GameRng,
    pub player: Player,
    /// Zombies in the current area
    pub zombies: Vec<Zombie>,
    /// Buildings in the current area
    pub buildings: Vec<Building>,
    pub clock: GameClock,
    /// Ticks elapsed this game
    pub ticks: u64,
    pub game_over: bool,
    pub death: Option<DeathCause>,
    /// Most recent messages, oldest first
    pub messages: VecDeque<String>,
    pub ids: EntityIds,
}

impl GameState {
    /// Start a new game: player in the centre of the first open area with
    /// full stats, and that area populated.
    pub fn new(config: GameConfig, rng: GameRng) -> Self {
        let bounds = config.bounds();
        let start = config
            .starting_area()
            .or_else(|| config.areas.first())
            .map(|a| a.id.clone())
            .unwrap_or_else(|| AreaId::new(""));
        let start_index = config.area_index(&start).unwrap_or(0);

        let mut unlocked: HashSet<AreaId> = config
            .areas
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.id.clone())
            .collect();
        unlocked.insert(start.clone());

        let player = Player::new(bounds.center(), config.max_inventory, start, unlocked);
        let clock = GameClock::new(config.start_hour);

        let mut state = Self {
            config,
            rng,
            player,
            zombies: Vec::new(),
            buildings: Vec::new(),
            clock,
            ticks: 0,
            game_over: false,
            death: None,
            messages: VecDeque::new(),
            ids: EntityIds::new(),
        };
        state.populate_area(start_index);

        let name = state
            .current_area()
            .map(|a| a.name.clone())
            .unwrap_or_default();
        state.message(format!("You arrive in {name}. Find supplies and stay alive."));
        tracing::info!(seed = state.rng.seed(), area = %state.player.current_area, "game started");
        state
    }

    /// Start a game seeded from the config, or from entropy when it has none
    pub fn from_config(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::new(config, rng)
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        self.messages.push_back(msg.into());
        while self.messages.len() > MAX_MESSAGES {
            self.messages.pop_front();
        }
    }

    pub fn current_area(&self) -> Option<&AreaDef> {
        self.config.area(&self.player.current_area)
    }

    pub fn current_area_index(&self) -> Option<usize> {
        self.config.area_index(&self.player.current_area)
    }

    /// Replace the area's zombies and buildings with a fresh population
    pub(crate) fn populate_area(&mut self, area_index: usize) {
        let contents = generate_area(
            area_index,
            &self.config,
            &self.player,
            &mut self.ids,
            &mut self.rng,
        );
        self.zombies = contents.zombies;
        self.buildings = contents.buildings;
    }

    pub fn zombie_at(&self, pos: Position) -> Option<&Zombie> {
        self.zombies.iter().find(|z| z.cell() == pos)
    }

    pub fn building_at(&self, pos: Position) -> Option<&Building> {
        self.buildings.iter().find(|b| b.position == pos)
    }

    /// The key still opens an area the player has not unlocked
    pub fn key_opens_locked_area(&self, key: &str) -> bool {
        self.config
            .areas
            .iter()
            .any(|a| a.required_key.as_deref() == Some(key) && !self.player.is_unlocked(&a.id))
    }

    /// Cause of death if a survival stat has run out
    fn fatal_cause(&self) -> Option<DeathCause> {
        let stats = &self.player.stats;
        if stats.health() <= 0.0 {
            Some(DeathCause::Wounds)
        } else if stats.hunger() <= 0.0 {
            Some(DeathCause::Starvation)
        } else if stats.thirst() <= 0.0 {
            Some(DeathCause::Dehydration)
        } else {
            None
        }
    }

    fn die(&mut self, cause: DeathCause) -> GameLoopResult {
        self.game_over = true;
        self.death = Some(cause);
        self.message(format!("You died. {cause}."));
        tracing::info!(%cause, day = self.clock.day, ticks = self.ticks, "game over");
        GameLoopResult::PlayerDied(cause)
    }

    /// Occasionally bring a new zombie in from the edge of the map
    fn maybe_spawn(&mut self) {
        let Some(limit) = self.current_area().map(|a| a.zombie_count as usize * 2) else {
            return;
        };
        if self.zombies.len() >= limit || !self.rng.chance(self.config.spawn_rate) {
            return;
        }
        let pos = self.rng.random_edge_position(self.config.bounds());
        if pos == self.player.position {
            return;
        }
        let zombie = Zombie::new(ZombieId(self.ids.next_id()), pos, &self.config.zombie);
        tracing::debug!(x = pos.x, y = pos.y, "zombie spawned");
        self.zombies.push(zombie);
    }
}

/// Owns the game state and applies ticks and commands to it
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Advance the world by one tick
    pub fn tick(&mut self) -> GameLoopResult {
        let state = &mut self.state;
        if state.game_over {
            return GameLoopResult::GameOver;
        }
        state.ticks += 1;

        // Survival stats decay
        let config = &state.config;
        let (hunger, thirst, fatigue) = (config.hunger_decay, config.thirst_decay, config.fatigue_decay);
        let stats = &mut state.player.stats;
        stats.adjust(Stat::Hunger, -hunger);
        stats.adjust(Stat::Thirst, -thirst);
        stats.adjust(Stat::Fatigue, -fatigue);

        if let Some(cause) = state.fatal_cause() {
            return state.die(cause);
        }

        // Zombies close in
        let bounds = state.config.bounds();
        let contacts = move_zombies(&mut state.zombies, state.player.position, bounds);
        if contacts > 0 {
            let damage = state.config.zombie.damage * contacts as f32;
            state.player.stats.adjust(Stat::Health, -damage);
            if contacts == 1 {
                state.message("A zombie bites you!");
            } else {
                state.message(format!("{contacts} zombies bite you!"));
            }
            if state.player.stats.health() <= 0.0 {
                return state.die(DeathCause::Zombies);
            }
        }

        // The flashlight only burns at night
        if state.clock.is_night() && state.player.flashlight_lit() {
            state.player.drain_battery(state.config.flashlight_drain);
            if !state.player.flashlight_lit() {
                state.message("Your flashlight flickers and dies.");
            }
        }

        state.maybe_spawn();

        let was_night = state.clock.is_night();
        if state.clock.advance(state.config.hours_per_tick) {
            let day = state.clock.day;
            state.message(format!("Day {day} begins."));
            tracing::info!(day, "new day");
        }
        if state.clock.is_night() && !was_night {
            state.message("Night falls. You can barely see.");
        } else if !state.clock.is_night() && was_night {
            state.message("The sun rises.");
        }

        tracing::trace!(
            tick = state.ticks,
            health = state.player.stats.health(),
            hunger = state.player.stats.hunger(),
            thirst = state.player.stats.thirst(),
            zombies = state.zombies.len(),
            "tick"
        );
        GameLoopResult::Continue
    }

    /// Apply a player command. Failures become messages.
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        let result = match command {
            Command::Restart => {
                self.restart();
                return GameLoopResult::Continue;
            }
            Command::Move(direction) => action::movement::do_move(&mut self.state, direction),
            Command::CollectHere => {
                let here = self.state.player.position;
                action::pickup::do_collect(&mut self.state, here)
            }
            Command::Collect(pos) => action::pickup::do_collect(&mut self.state, pos),
            Command::UseItem(id) => action::use_item::do_use(&mut self.state, id),
            Command::DropItem(id) => action::pickup::do_drop(&mut self.state, id),
            Command::Attack => action::attack::do_attack(&mut self.state),
            Command::SwitchArea(area) => action::area::do_switch_area(&mut self.state, &area),
        };

        match result {
            Ok(()) => GameLoopResult::Continue,
            Err(ActionError::GameOver) => GameLoopResult::GameOver,
            Err(err) => {
                tracing::debug!(error = %err, "action rejected");
                self.state.message(err.to_string());
                GameLoopResult::Continue
            }
        }
    }

    /// Throw the current game away and start over with the same settings
    pub fn restart(&mut self) {
        let seed = self.state.rng.next_seed();
        let config = self.state.config.clone();
        self.state = GameState::new(config, GameRng::new(seed));
        tracing::info!(seed, "game restarted");
    }
}
