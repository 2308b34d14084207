//! Errors returned by player actions
//!
//! None of these are fatal; the game loop reports them as messages.

use thiserror::Error;

use crate::object::ItemId;
use crate::world::AreaId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("You are dead.")]
    GameOver,

    #[error("That is too far away.")]
    OutOfReach,

    #[error("There is nothing here to loot.")]
    NothingToLoot,

    #[error("Your inventory is full.")]
    InventoryFull,

    #[error("You don't have that item.")]
    ItemNotFound(ItemId),

    #[error("You can't use the {0}.")]
    NotUsable(String),

    #[error("You need a flashlight for that.")]
    NoFlashlight,

    #[error("The {0} doesn't open anything.")]
    KeyFitsNothing(String),

    #[error("You hold on to the {0}; you still need it.")]
    KeyStillNeeded(String),

    #[error("There is no area called '{0}'.")]
    UnknownArea(AreaId),

    #[error("{0} is locked.")]
    AreaLocked(String),

    #[error("You are already in {0}.")]
    AlreadyThere(String),

    #[error("There is nothing to attack.")]
    NoTarget,

    #[error("You are too exhausted.")]
    Exhausted,
}
