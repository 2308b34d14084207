//! zomboid-tui: Terminal UI layer using ratatui
//!
//! Draws the grid, the survival stats, the inventory and the area selector,
//! and turns key presses and mouse clicks into game commands.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, PendingAction, UiMode};
pub use theme::Theme;
