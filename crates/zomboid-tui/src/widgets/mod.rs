//! Custom widgets

mod areas;
mod inventory;
mod map;
mod messages;
mod status;

pub use areas::AreasWidget;
pub use inventory::InventoryWidget;
pub use map::{CELL_WIDTH, MapWidget};
pub use messages::MessagesWidget;
pub use status::StatusWidget;
