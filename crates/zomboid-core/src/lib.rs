//! zomboid-core: Core game logic for the zomboid survival game
//!
//! This crate contains all game rules with no terminal I/O.
//! The front end drives it through [`GameLoop::tick`] on a fixed timer and
//! [`GameLoop::execute`] for player commands, and reads it back through
//! the projections in [`view`].

pub mod action;
pub mod config;
pub mod error;
pub mod monster;
pub mod object;
pub mod player;
pub mod view;
pub mod world;

mod consts;
mod gameloop;
mod rng;

pub use config::{ConfigError, GameConfig, ZombieConfig};
pub use consts::*;
pub use error::ActionError;
pub use gameloop::{DeathCause, GameLoop, GameLoopResult, GameState};
pub use rng::GameRng;
