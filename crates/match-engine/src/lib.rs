//! Match Engine
//!
//! Headless core of the Match Lines widget: pair catalog, board generation,
//! connection bookkeeping, gesture state and connector geometry.
//! Nothing here touches the DOM; drawing goes through [`RenderSurface`].

mod board;
mod catalog;
mod config;
mod connection;
mod error;
mod evaluator;
mod geometry;
mod gesture;
mod renderer;
mod session;
mod surface;

#[cfg(test)]
mod tests;

pub use board::{Board, BoardItem, DropSlot};
pub use catalog::{Pair, PairCatalog};
pub use config::GameConfig;
pub use connection::{Connection, ConnectionStore};
pub use error::{ConfigError, DropRejected};
pub use evaluator::{evaluate, Verdict};
pub use geometry::{Point, Rect};
pub use gesture::{DragController, DragState};
pub use renderer::{LineRenderer, LineStyle};
pub use session::Session;
pub use surface::{ElementRef, RenderSurface};
