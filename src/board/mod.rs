//! Board model: positions, cells, pieces.
//!
//! - `grid`: the bounds-checked cell store
//! - `piece`: worker instances with their mirrored positions
//! - `manager`: `Board`, which keeps the two in agreement

pub mod grid;
pub mod piece;
pub mod manager;

pub use grid::{Cell, Grid, Neighbors, Position, DOME_LEVEL, WIN_LEVEL};
pub use piece::Piece;
pub use manager::Board;
