//! UI Components

mod item_column;
mod result_panel;
mod slot_column;

pub use item_column::ItemColumn;
pub use result_panel::ResultPanel;
pub use slot_column::SlotColumn;
